//! Batch ingest endpoint.

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::MessageResponse;
use crate::app_state::AppState;
use crate::domain::BatchRequest;
use crate::error::AppError;

/// `POST /transaction` — Persist a batch of transactions.
///
/// The body is decoded as JSON whatever its `Content-Type`. Every record
/// is inserted by its own task and the handler waits for all of them.
/// Per-record failures are logged and do not change the response.
///
/// # Errors
///
/// Returns [`AppError::InvalidPayload`] (400, plain text) when the body is
/// not a valid batch. Nothing is persisted in that case.
#[utoipa::path(
    post,
    path = "/transaction",
    tag = "Transactions",
    summary = "Ingest a batch of transactions",
    request_body = BatchRequest,
    responses(
        (status = 200, description = "Batch processed", body = MessageResponse),
        (status = 400, description = "Malformed batch", body = String, content_type = "text/plain"),
    )
)]
pub async fn add_transactions(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let batch: BatchRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::InvalidPayload(e.to_string()))?;

    state.ingest_service.ingest(batch).await;

    Ok(Json(MessageResponse::batch_accepted()))
}

/// Transaction routes.
///
/// `body_limit` caps the request body in bytes; `None` removes the cap.
/// Oversized bodies are answered with `413 Payload Too Large`.
pub fn routes(body_limit: Option<usize>) -> Router<AppState> {
    let limit = body_limit.map_or_else(DefaultBodyLimit::disable, DefaultBodyLimit::max);
    Router::new().route("/transaction", post(add_transactions).layer(limit))
}
