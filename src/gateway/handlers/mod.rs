pub mod account;
pub mod health;
pub mod transfer;

pub use account::{create_account, delete_account, get_balance};
pub use health::{HealthResponse, health_check};
pub use transfer::transfer;
