//! REST API layer: route handlers, DTOs, OpenAPI document and router
//! composition.
//!
//! Routes are mounted at the root (`/`, `/transaction`, `/health`).

pub mod dto;
pub mod handlers;
pub mod openapi;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
///
/// `body_limit` is the largest accepted `POST /transaction` body in bytes,
/// or `None` for no limit. With the `swagger-ui` feature the interactive docs are served at
/// `/swagger-ui` and the raw document at `/api-docs/openapi.json`.
pub fn build_router(body_limit: Option<usize>) -> Router<AppState> {
    let router = handlers::routes(body_limit);

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(openapi::swagger_ui());

    router
}
