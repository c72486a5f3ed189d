//! Ledger Error Types
//!
//! Every domain error aborts the enclosing unit of work. The boundary maps
//! each variant to an API error code and an HTTP status.

use thiserror::Error;

use crate::account::AccountId;

/// PostgreSQL SQLSTATE for serialization_failure
const SQLSTATE_SERIALIZATION_FAILURE: &str = "40001";
/// PostgreSQL SQLSTATE for deadlock_detected
const SQLSTATE_DEADLOCK_DETECTED: &str = "40P01";

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Account not found: {0}")]
    NotFound(AccountId),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Not enough money for transfer, balance: {balance}, amount: {amount}")]
    InsufficientFunds { balance: i64, amount: i64 },

    #[error("Credit would overflow balance, balance: {balance}, amount: {amount}")]
    Overflow { balance: i64, amount: i64 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type LedgerResult<T> = Result<T, LedgerError>;

/// API error codes
pub mod error_codes {
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_ARGUMENT: i32 = 1001;
    pub const INSUFFICIENT_FUNDS: i32 = 1002;
    pub const INVALID_STATE: i32 = 1003;
    pub const OVERFLOW: i32 = 1004;

    // Resource errors (4xxx)
    pub const ACCOUNT_NOT_FOUND: i32 = 4004;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
}

impl LedgerError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        LedgerError::InvalidArgument(msg.into())
    }

    /// Store errors that go away when the whole unit of work is re-run
    pub fn is_transient(&self) -> bool {
        match self {
            LedgerError::Database(sqlx::Error::Database(db_err)) => matches!(
                db_err.code().as_deref(),
                Some(SQLSTATE_SERIALIZATION_FAILURE) | Some(SQLSTATE_DEADLOCK_DETECTED)
            ),
            LedgerError::Database(sqlx::Error::PoolTimedOut) => true,
            _ => false,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            LedgerError::InvalidArgument(_) => error_codes::INVALID_ARGUMENT,
            LedgerError::NotFound(_) => error_codes::ACCOUNT_NOT_FOUND,
            LedgerError::InvalidState(_) => error_codes::INVALID_STATE,
            LedgerError::InsufficientFunds { .. } => error_codes::INSUFFICIENT_FUNDS,
            LedgerError::Overflow { .. } => error_codes::OVERFLOW,
            LedgerError::Database(_) if self.is_transient() => error_codes::SERVICE_UNAVAILABLE,
            LedgerError::Database(_) => error_codes::INTERNAL_ERROR,
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            LedgerError::InvalidArgument(_)
            | LedgerError::InvalidState(_)
            | LedgerError::InsufficientFunds { .. }
            | LedgerError::Overflow { .. } => 400,
            LedgerError::NotFound(_) => 404,
            LedgerError::Database(_) if self.is_transient() => 503,
            LedgerError::Database(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            LedgerError::invalid_argument("illegal transfer").code(),
            error_codes::INVALID_ARGUMENT
        );
        assert_eq!(LedgerError::NotFound(7).code(), error_codes::ACCOUNT_NOT_FOUND);
        assert_eq!(
            LedgerError::InsufficientFunds {
                balance: 1,
                amount: 2
            }
            .code(),
            error_codes::INSUFFICIENT_FUNDS
        );
    }

    #[test]
    fn test_http_status() {
        assert_eq!(LedgerError::invalid_argument("x").http_status(), 400);
        assert_eq!(LedgerError::InvalidState("x".into()).http_status(), 400);
        assert_eq!(
            LedgerError::InsufficientFunds {
                balance: 30,
                amount: 100
            }
            .http_status(),
            400
        );
        assert_eq!(
            LedgerError::Overflow {
                balance: i64::MAX,
                amount: 1
            }
            .http_status(),
            400
        );
        assert_eq!(LedgerError::NotFound(1).http_status(), 404);
        assert_eq!(LedgerError::Database(sqlx::Error::RowNotFound).http_status(), 500);
        assert_eq!(LedgerError::Database(sqlx::Error::PoolTimedOut).http_status(), 503);
    }

    #[test]
    fn test_transient_classification() {
        assert!(LedgerError::Database(sqlx::Error::PoolTimedOut).is_transient());
        assert!(!LedgerError::Database(sqlx::Error::PoolClosed).is_transient());
        assert!(!LedgerError::NotFound(1).is_transient());
        assert!(
            !LedgerError::InsufficientFunds {
                balance: 0,
                amount: 1
            }
            .is_transient()
        );
    }

    #[test]
    fn test_display() {
        let err = LedgerError::InsufficientFunds {
            balance: 30,
            amount: 100,
        };
        assert_eq!(
            err.to_string(),
            "Not enough money for transfer, balance: 30, amount: 100"
        );
        assert_eq!(LedgerError::NotFound(42).to_string(), "Account not found: 42");
    }
}
