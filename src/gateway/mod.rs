//! HTTP boundary: maps requests to [`AccountService`](crate::service::AccountService)
//! calls and ledger errors to status codes

pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod retry;
pub mod state;
pub mod types;

use anyhow::Context;
use axum::{
    Router,
    routing::{delete, get, post},
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use retry::{RetryPolicy, with_retry};
pub use state::AppState;

/// Build the complete router. Shared by the server and black-box tests.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/account", post(handlers::create_account))
        .route("/account/", post(handlers::create_account))
        .route("/account/transfer", post(handlers::transfer))
        .route("/account/{id}", delete(handlers::delete_account))
        .route("/account/{id}/balance", get(handlers::get_balance))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(axum::middleware::from_fn(middleware::log_requests))
}

/// Serve until `shutdown` resolves, then drain in-flight requests
pub async fn run_server<F>(addr: &str, state: Arc<AppState>, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await.with_context(|| {
        format!("Failed to bind to {} (port may already be in use)", addr)
    })?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API Docs: http://{}/docs", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    tracing::info!("Gateway stopped");
    Ok(())
}
