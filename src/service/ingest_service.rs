//! Ingest service: persists every record of a batch concurrently.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;

use crate::domain::{BatchOutcome, BatchRequest, NewTransaction, RecordFailure, Transaction};
use crate::error::AppError;
use crate::persistence::TransactionStore;

/// Fans a batch out to one insert task per record and joins on all of
/// them before returning.
///
/// Tasks run on the Tokio runtime with no ordering among themselves. The
/// store is the only shared resource and owns its own synchronization.
/// A failed insert never aborts its siblings.
#[derive(Debug, Clone)]
pub struct IngestService {
    store: Arc<dyn TransactionStore>,
    insert_timeout: Option<Duration>,
}

impl IngestService {
    /// Creates a new `IngestService` writing to `store`.
    ///
    /// When `insert_timeout` is set, each insert that takes longer is
    /// reported as failed.
    #[must_use]
    pub fn new(store: Arc<dyn TransactionStore>, insert_timeout: Option<Duration>) -> Self {
        Self {
            store,
            insert_timeout,
        }
    }

    /// Persists every record of `batch` and waits for all inserts to
    /// settle.
    ///
    /// Dispatches exactly one task per record, each doing a single
    /// `create`. Returns only after every task has finished, successfully
    /// or not.
    pub async fn ingest(&self, batch: BatchRequest) -> BatchOutcome {
        let request_id = batch.request_id;
        let attempted = batch.data.len();

        let handles: Vec<_> = batch
            .data
            .into_iter()
            .map(|record| {
                let store = Arc::clone(&self.store);
                let timeout = self.insert_timeout;
                tokio::spawn(async move { insert_one(&*store, &record, timeout).await })
            })
            .collect();

        let results = join_all(handles).await;

        let mut failures = Vec::new();
        for (index, joined) in results.into_iter().enumerate() {
            let outcome = joined
                .map_err(|e| AppError::Internal(format!("insert task aborted: {e}")))
                .and_then(|inserted| inserted);
            if let Err(err) = outcome {
                tracing::warn!(request_id, index, error = %err, "failed to persist transaction");
                failures.push(RecordFailure {
                    index,
                    reason: err.to_string(),
                });
            }
        }

        let outcome = BatchOutcome {
            request_id,
            attempted,
            persisted: attempted.saturating_sub(failures.len()),
            failures,
        };

        if outcome.is_complete() {
            tracing::info!(
                request_id,
                attempted = outcome.attempted,
                persisted = outcome.persisted,
                "batch ingested"
            );
        } else {
            tracing::info!(
                request_id,
                attempted = outcome.attempted,
                persisted = outcome.persisted,
                failed_indices = ?outcome.failed_indices(),
                "batch ingested with failures"
            );
        }
        outcome
    }
}

/// Runs a single insert, bounded by `timeout` when one is configured.
async fn insert_one(
    store: &dyn TransactionStore,
    record: &NewTransaction,
    timeout: Option<Duration>,
) -> Result<Transaction, AppError> {
    match timeout {
        Some(limit) => tokio::time::timeout(limit, store.create(record))
            .await
            .map_err(|_| AppError::Timeout(limit))?,
        None => store.create(record).await,
    }
}
