use super::retry::RetryPolicy;
use crate::service::AccountService;

/// Gateway shared state
#[derive(Clone)]
pub struct AppState {
    pub service: AccountService,
    /// Applied to every service call from a handler
    pub retry: RetryPolicy,
}

impl AppState {
    pub fn new(service: AccountService, retry: RetryPolicy) -> Self {
        Self { service, retry }
    }
}
