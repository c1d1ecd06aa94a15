//! Aegis Market API Server
//!
//! HTTP API serving the market catalog and the transaction history over the
//! in-memory repository.

mod config;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use aegis_data::{InMemoryRepository, MarketRepository};
use axum::{
    http::{header, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct ApiState {
    pub repository: Arc<dyn MarketRepository>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,aegis_api=debug")),
        )
        .init();

    info!("Starting Aegis Market API");

    let config = Config::from_env()?;

    // Seed the in-memory repository with the demo catalog
    let repository: Arc<dyn MarketRepository> = Arc::new(InMemoryRepository::seeded());
    let markets = repository.list_markets().await?;
    let transactions = repository.list_transactions().await?;
    info!(
        "Seeded {} markets and {} starting transactions",
        markets.len(),
        transactions.len()
    );

    let state = ApiState { repository };

    // Configure CORS for the frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    // Build router
    let app = Router::new()
        .nest("/api", routes::api_routes())
        .merge(routes::health_routes())
        .layer(cors)
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
