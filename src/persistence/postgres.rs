//! PostgreSQL implementation of the persistence layer.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use super::TransactionStore;
use crate::config::DatabaseConfig;
use crate::domain::{NewTransaction, Transaction};
use crate::error::AppError;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// PostgreSQL-backed store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool sized from `config`.
    ///
    /// Establishes at least one connection eagerly so an unreachable
    /// database is reported here rather than on the first request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if no connection can be made
    /// within the configured timeout.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect(&config.connection_url())
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "connected to postgres"
        );
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl TransactionStore for PostgresStore {
    async fn migrate(&self) -> Result<(), AppError> {
        MIGRATOR.run(&self.pool).await?;
        tracing::info!("transactions schema is up to date");
        Ok(())
    }

    async fn create(&self, record: &NewTransaction) -> Result<Transaction, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO transactions (customer, quantity, price, \"timestamp\") \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&record.customer)
        .bind(record.quantity)
        .bind(record.price)
        .bind(record.timestamp)
        .fetch_one(&self.pool)
        .await?;

        Ok(Transaction::from_new(id, record.clone()))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM transactions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
