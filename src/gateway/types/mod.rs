//! Gateway types module
//!
//! ## Input Types
//! - [`CreateAccountRequest`], [`TransferRequest`]: JSON request bodies
//! - [`JsonBody`]: JSON extractor that rejects malformed bodies with 400
//!
//! ## Output Types
//! - [`ApiResponse<T>`]: JSON response wrapper
//! - [`ApiError`]: handler error mapped from [`LedgerError`](crate::error::LedgerError)

pub mod extract;
pub mod request;
pub mod response;

pub use extract::{JsonBody, parse_account_id};
pub use request::{CreateAccountRequest, TransferRequest};
pub use response::{ApiError, ApiResponse, ApiResult};
