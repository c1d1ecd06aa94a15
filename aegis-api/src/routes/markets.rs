//! Market catalog endpoints

use aegis_core::{Market, MarketOption, MarketWithOptions};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::{error, info};

use super::{internal_error, not_found};
use crate::ApiState;

/// Response for listing markets
#[derive(Debug, Serialize)]
pub struct MarketsResponse {
    pub markets: Vec<Market>,
    pub count: usize,
}

/// Response for listing a market's options
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub options: Vec<MarketOption>,
    pub count: usize,
}

/// Create market routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/markets", get(list_markets))
        .route("/markets/{id}", get(get_market))
        .route("/markets/{id}/options", get(list_options))
}

/// List all markets
async fn list_markets(State(state): State<ApiState>) -> impl IntoResponse {
    match state.repository.list_markets().await {
        Ok(markets) => {
            let count = markets.len();
            Json(MarketsResponse { markets, count }).into_response()
        }
        Err(e) => {
            error!("Failed to list markets: {}", e);
            internal_error(e)
        }
    }
}

/// Get a single market together with its options
async fn get_market(State(state): State<ApiState>, Path(id): Path<String>) -> impl IntoResponse {
    info!("Fetching market {}", id);

    let market = match state.repository.get_market(&id).await {
        Ok(Some(market)) => market,
        Ok(None) => return not_found("market"),
        Err(e) => {
            error!("Failed to get market {}: {}", id, e);
            return internal_error(e);
        }
    };

    match state.repository.list_options(&id).await {
        Ok(options) => Json(MarketWithOptions { market, options }).into_response(),
        Err(e) => {
            error!("Failed to list options for market {}: {}", id, e);
            internal_error(e)
        }
    }
}

/// List the options belonging to a market
async fn list_options(State(state): State<ApiState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.repository.list_options(&id).await {
        Ok(options) => {
            let count = options.len();
            Json(OptionsResponse { options, count }).into_response()
        }
        Err(e) => {
            error!("Failed to list options for market {}: {}", id, e);
            internal_error(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use aegis_data::InMemoryRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
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

    #[tokio::test]
    async fn test_list_markets_returns_the_catalog() {
        let response = test_app()
            .oneshot(Request::get("/api/markets").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["count"], 5);
        assert_eq!(json["markets"][0]["title"], "Will Bitcoin reach $100k?");
    }

    #[tokio::test]
    async fn test_get_market_includes_options() {
        let response = test_app()
            .oneshot(Request::get("/api/markets/1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["id"], "1");
        assert_eq!(json["options"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_market_is_404() {
        let response = test_app()
            .oneshot(
                Request::get("/api/markets/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_options_of_a_market() {
        let response = test_app()
            .oneshot(
                Request::get("/api/markets/3/options")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["count"], 2);
        assert_eq!(json["options"][0]["title"], "Rally");
    }
}
