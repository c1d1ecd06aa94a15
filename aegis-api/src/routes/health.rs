//! Health check endpoints

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;

use crate::ApiState;

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    markets: usize,
    transactions: usize,
}

/// Health check handler
async fn health_check(State(state): State<ApiState>) -> Json<HealthResponse> {
    let markets = state
        .repository
        .list_markets()
        .await
        .map(|m| m.len())
        .unwrap_or(0);
    let transactions = state
        .repository
        .list_transactions()
        .await
        .map(|t| t.len())
        .unwrap_or(0);

    Json(HealthResponse {
        status: "healthy".to_string(),
        markets,
        transactions,
    })
}

/// Simple liveness check (always returns OK if server is running)
async fn liveness() -> &'static str {
    "OK"
}

/// Create health routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
}
