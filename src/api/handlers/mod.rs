//! REST endpoint handlers.

pub mod system;
pub mod transaction;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes. `body_limit` applies to the ingest
/// endpoint; see [`transaction::routes`].
pub fn routes(body_limit: Option<usize>) -> Router<AppState> {
    Router::new()
        .merge(system::routes())
        .merge(transaction::routes(body_limit))
}
