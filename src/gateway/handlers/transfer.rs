//! Transfer handler

use std::sync::Arc;

use axum::{extract::State, http::StatusCode};

use super::super::retry::with_retry;
use super::super::state::AppState;
use super::super::types::{ApiResult, JsonBody, TransferRequest};

/// Transfer funds between two accounts
///
/// POST /account/transfer
#[utoipa::path(
    post,
    path = "/account/transfer",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Transfer committed"),
        (status = 400, description = "Invalid argument, insufficient funds or malformed body"),
        (status = 404, description = "Source or target account not found"),
        (status = 503, description = "Store contention did not clear within the retry budget")
    ),
    tag = "Transfer"
)]
pub async fn transfer(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<TransferRequest>,
) -> ApiResult<StatusCode> {
    tracing::debug!(
        from_id = req.from_id,
        to_id = req.to_id,
        amount = req.amount,
        "Transfer request"
    );

    with_retry(&state.retry, "transfer", || {
        state.service.transfer(req.from_id, req.to_id, req.amount)
    })
    .await?;
    Ok(StatusCode::OK)
}
