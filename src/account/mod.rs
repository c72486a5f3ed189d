//! Account management module
//!
//! PostgreSQL-backed storage for ledger accounts.

pub mod models;
pub mod repository;

pub use models::{Account, AccountId};
pub use repository::AccountRepository;
