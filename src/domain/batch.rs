//! Batch request payload and the per-batch ingest report.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::NewTransaction;
use super::transaction::null_as_default;

/// Body of `POST /transaction`.
///
/// Missing or `null` fields decode to their zero values, so `{}` and
/// `{"data": null}` are empty batches.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BatchRequest {
    /// Caller-supplied correlation id. Logged, never persisted.
    #[serde(default, deserialize_with = "null_as_default")]
    pub request_id: u64,
    /// Records to persist, in submission order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<NewTransaction>,
}

/// A record whose insert did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    /// Position of the record within [`BatchRequest::data`].
    pub index: usize,
    /// Error text reported by the store or the task runtime.
    pub reason: String,
}

/// Result of ingesting one batch.
///
/// Only used for logging and tests; the HTTP response does not expose it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Correlation id copied from the request.
    pub request_id: u64,
    /// Number of inserts dispatched.
    pub attempted: usize,
    /// Number of inserts that succeeded.
    pub persisted: usize,
    /// Failed inserts, ordered by record index.
    pub failures: Vec<RecordFailure>,
}

impl BatchOutcome {
    /// Returns `true` when every dispatched insert succeeded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Indices of the records that failed to persist.
    #[must_use]
    pub fn failed_indices(&self) -> Vec<usize> {
        self.failures.iter().map(|f| f.index).collect()
    }
}
