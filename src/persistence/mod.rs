//! Persistence layer: durable storage of transaction records.
//!
//! [`TransactionStore`] is the seam between the ingest pipeline and the
//! database. [`PostgresStore`] backs it with `sqlx::PgPool`;
//! [`MemoryStore`] keeps rows in process for tests and for running with
//! persistence disabled. Implementations must be safe to share across
//! tasks: the pipeline calls `create` concurrently on one instance.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{NewTransaction, Transaction};
use crate::error::AppError;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Storage backend for transaction records.
#[async_trait]
pub trait TransactionStore: Send + Sync + std::fmt::Debug {
    /// Ensures the transactions table exists. Safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the backend is unreachable or
    /// the schema cannot be applied.
    async fn migrate(&self) -> Result<(), AppError>;

    /// Inserts one record and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on constraint violations or
    /// connection loss. Nothing is retried.
    async fn create(&self, record: &NewTransaction) -> Result<Transaction, AppError>;

    /// Returns the number of stored transactions. Meant for verification
    /// and tests; request handlers do not call it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database failure.
    async fn count(&self) -> Result<i64, AppError>;

    /// Cheap round trip confirming the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] when the backend does not answer.
    async fn ping(&self) -> Result<(), AppError>;
}
