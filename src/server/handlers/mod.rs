pub mod occupancy;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

use crate::models::format_clock;
use crate::server::AppState;

/// Liveness plus the windows this instance resolves requests against
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let window = &state.window;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        bookable_start: window.bookable_start.clone(),
        bookable_end: window.bookable_end.clone(),
        business_start: format_clock(window.business_start_minutes),
        business_end: format_clock(window.business_end_minutes),
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: String,
    version: String,
    bookable_start: String,
    bookable_end: String,
    business_start: String,
    business_end: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}
