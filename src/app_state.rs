//! Shared application state injected into all Axum handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::persistence::TransactionStore;
use crate::service::IngestService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Batch ingest pipeline.
    pub ingest_service: Arc<IngestService>,
    /// Store handle, pinged by the health check.
    pub store: Arc<dyn TransactionStore>,
}

impl AppState {
    /// Builds the state around `store`, which is shared by the ingest
    /// service and the handlers.
    #[must_use]
    pub fn new(store: Arc<dyn TransactionStore>, insert_timeout: Option<Duration>) -> Self {
        let ingest_service = Arc::new(IngestService::new(Arc::clone(&store), insert_timeout));
        Self {
            ingest_service,
            store,
        }
    }
}
