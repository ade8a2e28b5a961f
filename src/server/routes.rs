use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/v1/occupancy", post(handlers::occupancy::occupancy))
        .route(
            "/v1/occupancy/segments",
            post(handlers::occupancy::occupancy_segments),
        )
        .route(
            "/v1/busy-segments",
            post(handlers::occupancy::busy_segments),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
