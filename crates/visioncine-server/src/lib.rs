//! VisionCine JSON API server
//!
//! Re-exposes the scraped catalog as a small JSON API: home listing,
//! search, per-kind listings, and slug-to-video resolution.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use std::net::SocketAddr;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;

/// Builds the API router over the given state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health))
        .route("/api/home", get(routes::home))
        .route("/api/search", get(routes::search))
        .route("/api/movies", get(routes::movies))
        .route("/api/series", get(routes::series))
        .route("/api/animes", get(routes::animes))
        .route("/api/video/{slug}", get(routes::video))
        .route("/api/test", get(routes::test_connection))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the listener and serves the API until the process exits
pub async fn run_server(
    addr: SocketAddr,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "VisionCine API listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
