//! Atomic transfers between two accounts
//!
//! See [`engine`] for the locking protocol and its invariants.

pub mod engine;

pub use engine::{LockOrder, TransferEngine, TransferReceipt, settle, validate_request};
