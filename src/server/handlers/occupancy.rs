use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::ErrorResponse;
use crate::models::Booking;
use crate::occupancy::{
    busy_segments_for_viewer, compute_room_occupancy, compute_room_occupancy_segments, WindowSpec,
};
use crate::server::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyRequest {
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl OccupancyRequest {
    fn window(&self) -> WindowSpec {
        WindowSpec::from_parts(self.start.as_deref(), self.end.as_deref())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusySegmentsRequest {
    #[serde(flatten)]
    pub query: OccupancyRequest,
    /// Bookings whose `owner` equals this are tagged own
    #[serde(default)]
    pub viewer: Option<String>,
}

fn bad_request(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(format!(
            "Invalid request body: {}",
            rejection.body_text()
        ))),
    )
        .into_response()
}

/// Full occupancy metrics for a set of bookings
pub async fn occupancy(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OccupancyRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(p) => p,
        Err(rejection) => return bad_request(rejection),
    };

    let metrics = compute_room_occupancy(
        &req.bookings,
        req.day.as_deref(),
        &req.window(),
        &state.window,
    );
    Json(metrics).into_response()
}

/// Occupied ring segments only
pub async fn occupancy_segments(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OccupancyRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(p) => p,
        Err(rejection) => return bad_request(rejection),
    };

    let segments = compute_room_occupancy_segments(
        &req.bookings,
        req.day.as_deref(),
        &req.window(),
        &state.window,
    );
    Json(segments).into_response()
}

/// Busy segments tagged own/other relative to the viewer
pub async fn busy_segments(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BusySegmentsRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(p) => p,
        Err(rejection) => return bad_request(rejection),
    };

    let segments = busy_segments_for_viewer(
        &req.query.bookings,
        req.query.day.as_deref(),
        req.query.window(),
        req.viewer.as_deref(),
        &state.window,
    );
    Json(segments).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::models::WindowConfig;
    use crate::server::{create_router, AppState};

    async fn post_json(uri: &str, body: String) -> (StatusCode, Value) {
        let app = create_router(Arc::new(AppState::new(WindowConfig::default())));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_occupancy_endpoint() {
        let body = json!({
            "bookings": [
                {"date": "2024-01-01", "startTime": "09:00", "endTime": "10:00"},
                {"date": "2024-01-01", "startTime": "09:30", "endTime": "11:00"}
            ],
            "day": "2024-01-01",
            "start": "09:00",
            "end": "17:00"
        });
        let (status, value) = post_json("/v1/occupancy", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["occupiedMinutes"], 120);
        assert_eq!(value["windowMinutes"], 480);
        assert_eq!(value["occupiedRatio"], 0.25);
        assert_eq!(value["intervals"], json!([{"startMin": 540, "endMin": 660}]));
    }

    #[tokio::test]
    async fn test_segments_endpoint_with_empty_window() {
        let body = json!({"bookings": [], "start": "10:00", "end": "10:00"});
        let (status, value) = post_json("/v1/occupancy/segments", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(value, json!([]));
    }

    #[tokio::test]
    async fn test_busy_segments_endpoint() {
        let body = json!({
            "bookings": [
                {"startTime": "09:00", "endTime": "13:00", "owner": "me"},
                {"startTime": "12:00", "endTime": "15:00", "owner": "you"}
            ],
            "start": "09:00",
            "end": "17:00",
            "viewer": "me"
        });
        let (status, value) = post_json("/v1/busy-segments", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            value,
            json!([
                {"p0": 0.0, "p1": 0.5, "tone": "own"},
                {"p0": 0.5, "p1": 0.75, "tone": "other"}
            ])
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let (status, value) = post_json("/v1/occupancy", "{\"bookings\": 3}".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(value["error"].as_str().unwrap().starts_with("Invalid request body"));
    }
}
