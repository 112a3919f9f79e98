//! HTTP rendering of the shared error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use navguard_core::error::{ClientCode, NavGuardError};

/// Axum-facing wrapper around [`NavGuardError`].
#[derive(Debug)]
pub struct ApiError(pub NavGuardError);

impl From<NavGuardError> for ApiError {
    fn from(e: NavGuardError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({
            "error": code.as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
