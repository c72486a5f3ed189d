//! Account Ledger
//!
//! Accounts, balances and atomic transfers on top of PostgreSQL.
//!
//! # Modules
//!
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup
//! - [`error`] - Ledger error taxonomy
//! - [`db`] - Connection pool, unit of work, schema lifecycle
//! - [`account`] - Account model and repository
//! - [`transfer`] - Ordered-locking transfer engine
//! - [`service`] - One transaction per operation
//! - [`gateway`] - HTTP boundary

pub mod account;
pub mod config;
pub mod db;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod service;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{Account, AccountId, AccountRepository};
pub use db::{Database, UnitOfWork};
pub use error::{LedgerError, LedgerResult};
pub use service::AccountService;
pub use transfer::{TransferEngine, TransferReceipt};
