//! REST API endpoints for the crema-service.
//!
//! This module provides HTTP endpoints for the shot history and its
//! derived statistics.
//!
//! ## Error Handling
//!
//! All endpoints return structured JSON errors via [`AppError`]. Missing
//! records return 404; malformed create payloads and payloads without an
//! id return 400.
//!
//! # Example
//!
//! ```ignore
//! use axum::Router;
//! use crema_service::api;
//!
//! let app = api::router().with_state(state);
//! ```

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crema_core::{DailyStats, OverviewStats};
use crema_store::DEFAULT_LIST_LIMIT;
use crema_types::Shot;

use crate::state::AppState;

/// Create the API router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        // Health
        .route("/api/health", get(health))
        // Shot history
        .route("/api/shots", get(list_shots).post(create_shot))
        .route("/api/shots/{id}", get(get_shot).delete(delete_shot))
        // Statistics
        .route("/api/stats/overview", get(stats_overview))
        .route("/api/stats/daily", get(stats_daily))
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: OffsetDateTime::now_utc(),
    })
}

/// Upper bound a single list request can ask for.
const MAX_LIST_LIMIT: i64 = 1000;

/// Query parameters for listing shots.
#[derive(Debug, Deserialize, Default)]
pub struct ListShotsQuery {
    /// Maximum number of shots to return, parsed leniently.
    pub limit: Option<String>,
}

impl ListShotsQuery {
    /// Resolve the requested limit to an effective one.
    ///
    /// Missing, non-numeric, and non-positive values fall back to the
    /// default window; oversized values are capped at `MAX_LIST_LIMIT`.
    pub fn effective_limit(&self) -> i64 {
        self.limit
            .as_deref()
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|n| *n > 0)
            .map(|n| n.min(MAX_LIST_LIMIT))
            .unwrap_or(DEFAULT_LIST_LIMIT as i64)
    }
}

/// List recent shots, newest first.
///
/// # Query Parameters
///
/// - `limit`: Maximum number of shots to return (default 100, capped at
///   1000). Values that do not parse as a positive integer fall back to
///   the default.
async fn list_shots(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListShotsQuery>,
) -> Json<Vec<Shot>> {
    Json(state.shots.list(params.effective_limit()).await)
}

/// Get a single shot by id.
async fn get_shot(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Shot>, AppError> {
    let shot = state.shots.get(&id).await?;
    Ok(Json(shot))
}

/// Store a shot, replacing any existing record with the same id.
///
/// Bodies that fail JSON extraction return 400 with the standard error
/// shape instead of axum's default rejection.
async fn create_shot(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Shot>, JsonRejection>,
) -> Result<(StatusCode, Json<Shot>), AppError> {
    let Json(shot) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    if shot.shot_id.is_empty() {
        return Err(AppError::BadRequest(
            "shot_id must not be empty".to_string(),
        ));
    }

    let stored = state.shots.create(shot).await;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// Delete a shot. Deleting an unknown id is a no-op.
async fn delete_shot(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> StatusCode {
    state.shots.delete(&id).await;
    StatusCode::NO_CONTENT
}

/// Fleet-wide statistics over the full history.
async fn stats_overview(State(state): State<Arc<AppState>>) -> Json<OverviewStats> {
    Json(state.shots.overview().await)
}

/// Per-day statistics, ascending by date.
async fn stats_daily(State(state): State<Arc<AppState>>) -> Json<Vec<DailyStats>> {
    Json(state.shots.daily().await)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl From<crema_store::Error> for AppError {
    fn from(e: crema_store::Error) -> Self {
        match e {
            crema_store::Error::NotFound(_) => AppError::NotFound(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message,
        });

        (status, Json(body)).into_response()
    }
}
