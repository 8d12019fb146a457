//! Domain layer: transaction records and batch ingest results.

pub mod batch;
pub mod transaction;

pub use batch::{BatchOutcome, BatchRequest, RecordFailure};
pub use transaction::{NewTransaction, Transaction};
