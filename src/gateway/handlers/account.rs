//! Account lifecycle and balance handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use super::super::retry::with_retry;
use super::super::state::AppState;
use super::super::types::{ApiResult, CreateAccountRequest, JsonBody, parse_account_id};

/// Get account balance
///
/// GET /account/{id}/balance
#[utoipa::path(
    get,
    path = "/account/{id}/balance",
    params(
        ("id" = i64, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Balance in minor units as decimal text", body = String, content_type = "text/plain"),
        (status = 400, description = "Account ID is not an integer"),
        (status = 404, description = "Account not found")
    ),
    tag = "Account"
)]
pub async fn get_balance(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<String> {
    let id = parse_account_id(&raw_id)?;
    let balance = with_retry(&state.retry, "get_balance", || state.service.get_balance(id)).await?;
    Ok(balance.to_string())
}

/// Create account
///
/// POST /account/
#[utoipa::path(
    post,
    path = "/account/",
    request_body = CreateAccountRequest,
    responses(
        (status = 200, description = "New account ID as decimal text", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed body")
    ),
    tag = "Account"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateAccountRequest>,
) -> ApiResult<String> {
    let id = with_retry(&state.retry, "create", || state.service.create(req.balance)).await?;
    Ok(id.to_string())
}

/// Delete an empty account
///
/// DELETE /account/{id}
#[utoipa::path(
    delete,
    path = "/account/{id}",
    params(
        ("id" = i64, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account deleted"),
        (status = 400, description = "Balance is not zero, or ID is not an integer"),
        (status = 404, description = "Account not found")
    ),
    tag = "Account"
)]
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_account_id(&raw_id)?;
    with_retry(&state.retry, "delete", || state.service.delete(id)).await?;
    Ok(StatusCode::OK)
}
