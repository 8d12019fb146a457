//! Response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned after a batch has been processed.
pub const BATCH_ACCEPTED_MESSAGE: &str = "Data transaction berhasil dimasukkan";

/// Greeting served at `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to transaction API!";

/// Single-field JSON acknowledgement, e.g.
/// `{"message": "Data transaction berhasil dimasukkan"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable status message.
    pub message: String,
}

impl MessageResponse {
    /// Acknowledgement for a processed batch.
    #[must_use]
    pub fn batch_accepted() -> Self {
        Self {
            message: BATCH_ACCEPTED_MESSAGE.to_string(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"healthy"` when served with status 200.
    pub status: String,
    /// Server time, RFC 3339.
    pub timestamp: String,
    /// Crate version.
    pub version: String,
}
