//! Service layer: batch ingest orchestration.
//!
//! [`IngestService`] owns the fan-out/join over a shared
//! [`crate::persistence::TransactionStore`].

pub mod ingest_service;

pub use ingest_service::IngestService;
