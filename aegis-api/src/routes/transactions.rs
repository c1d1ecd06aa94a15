//! Transaction history endpoints

use aegis_core::{NewTransaction, Transaction, TransactionUpdate};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{error, info};

use super::{internal_error, not_found, ErrorResponse};
use crate::ApiState;

/// Response for listing transactions
#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub count: usize,
}

/// Create transaction routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/transactions", get(list_transactions).post(create_transaction))
        .route(
            "/transactions/{id}",
            patch(update_transaction).delete(delete_transaction),
        )
}

fn bad_request(message: &str) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// List all transactions
async fn list_transactions(State(state): State<ApiState>) -> impl IntoResponse {
    match state.repository.list_transactions().await {
        Ok(transactions) => {
            let count = transactions.len();
            Json(TransactionsResponse {
                transactions,
                count,
            })
            .into_response()
        }
        Err(e) => {
            error!("Failed to list transactions: {}", e);
            internal_error(e)
        }
    }
}

/// Create a transaction; the repository assigns the id
async fn create_transaction(
    State(state): State<ApiState>,
    Json(new): Json<NewTransaction>,
) -> impl IntoResponse {
    if new.price <= Decimal::ZERO {
        return bad_request("price must be positive");
    }

    match state.repository.create_transaction(new).await {
        Ok(transaction) => {
            info!("Created transaction {}", transaction.id);
            (StatusCode::CREATED, Json(transaction)).into_response()
        }
        Err(e) => {
            error!("Failed to create transaction: {}", e);
            internal_error(e)
        }
    }
}

/// Merge a partial update into a transaction
async fn update_transaction(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(update): Json<TransactionUpdate>,
) -> impl IntoResponse {
    if matches!(update.price, Some(price) if price <= Decimal::ZERO) {
        return bad_request("price must be positive");
    }

    match state.repository.update_transaction(&id, update).await {
        Ok(Some(merged)) => Json(merged).into_response(),
        Ok(None) => not_found("transaction"),
        Err(e) => {
            error!("Failed to update transaction {}: {}", id, e);
            internal_error(e)
        }
    }
}

/// Delete a transaction
async fn delete_transaction(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.repository.delete_transaction(&id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => not_found("transaction"),
        Err(e) => {
            error!("Failed to delete transaction {}: {}", id, e);
            internal_error(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use aegis_data::InMemoryRepository;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::routes;
    use crate::ApiState;

    fn test_app() -> Router {
        let state = ApiState {
            repository: Arc::new(InMemoryRepository::seeded()),
        };
        Router::new()
            .nest("/api", routes::api_routes())
            .with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_transactions_returns_the_seed_history() {
        let response = test_app()
            .oneshot(
                Request::get("/api/transactions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["count"], 3);
        assert_eq!(json["transactions"][0]["id"], "tx1");
        assert_eq!(json["transactions"][1]["transaction_type"], "sell");
    }

    #[tokio::test]
    async fn test_create_assigns_an_id_and_returns_201() {
        let app = test_app();
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/transactions",
                json!({
                    "user_id": "user1",
                    "market_id": "1",
                    "option_id": "opt1",
                    "transaction_type": "buy",
                    "price": "12.50",
                    "created_at": "2024-11-02T10:00:00Z",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["option_id"], "opt1");
        let id = json["id"].as_str().unwrap();
        assert!(!id.is_empty());
        assert_ne!(id, "tx1");
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_price() {
        let response = test_app()
            .oneshot(json_request(
                "POST",
                "/api/transactions",
                json!({
                    "user_id": "user1",
                    "market_id": "1",
                    "option_id": "opt1",
                    "transaction_type": "buy",
                    "price": "0",
                    "created_at": "2024-11-02T10:00:00Z",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_patch_merges_the_named_fields() {
        let response = test_app()
            .oneshot(json_request(
                "PATCH",
                "/api/transactions/tx1",
                json!({ "price": "20.00" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["id"], "tx1");
        assert_eq!(json["price"], "20.00");
        // Fields not named by the update keep their prior values.
        assert_eq!(json["option_id"], "opt1");
        assert_eq!(json["transaction_type"], "buy");
    }

    #[tokio::test]
    async fn test_patch_unknown_transaction_is_404() {
        let response = test_app()
            .oneshot(json_request(
                "PATCH",
                "/api/transactions/tx999",
                json!({ "price": "20.00" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(
                Request::delete("/api/transactions/tx1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // The same id is gone now.
        let response = app
            .oneshot(
                Request::delete("/api/transactions/tx1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
