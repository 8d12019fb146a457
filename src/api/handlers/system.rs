//! System endpoints: greeting and health check.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use crate::api::dto::{HealthResponse, WELCOME_MESSAGE};
use crate::app_state::AppState;
use crate::error::{AppError, ErrorResponse};

/// `GET /` — Static greeting.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Greeting",
    responses(
        (status = 200, description = "Greeting text", body = String, content_type = "text/plain"),
    )
)]
pub async fn home() -> &'static str {
    WELCOME_MESSAGE
}

/// `GET /health` — Service health status.
///
/// # Errors
///
/// Returns [`AppError::Persistence`] when the store cannot be queried.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health, version and current time once the store answers a ping.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Store unreachable", body = ErrorResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.store.ping().await?;
    Ok((
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    ))
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_handler))
}
