//! Request extraction with ledger error semantics
//!
//! axum answers malformed JSON with 400, 415 or 422 depending on the failure.
//! Every malformed request body is an invalid argument here, so all of them
//! become 400 with the usual error envelope.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use super::response::ApiError;
use crate::account::AccountId;

/// `Json<T>` whose rejection is an [`ApiError`] with status 400
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    tracing::debug!(status = %rejection.status(), "Malformed request body");
    ApiError::bad_request(rejection.body_text())
}

/// Parse a path segment as an account id
pub fn parse_account_id(raw: &str) -> Result<AccountId, ApiError> {
    raw.parse::<AccountId>()
        .map_err(|_| ApiError::bad_request(format!("invalid account id: {}", raw)))
}
