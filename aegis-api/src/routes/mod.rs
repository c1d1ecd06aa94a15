//! API route definitions

mod health;
mod markets;
mod transactions;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde::Serialize;

use crate::ApiState;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 404 with the standard error body
pub(crate) fn not_found(what: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("{} not found", what),
        }),
    )
        .into_response()
}

/// 500 with the standard error body
pub(crate) fn internal_error(error: impl std::fmt::Display) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

/// Create all API routes
pub fn api_routes() -> Router<ApiState> {
    Router::new()
        .merge(markets::routes())
        .merge(transactions::routes())
}

/// Create health routes (outside the /api prefix)
pub fn health_routes() -> Router<ApiState> {
    health::routes()
}
