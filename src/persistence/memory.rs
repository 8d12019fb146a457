//! In-process transaction store.
//!
//! Rows live in a `Vec` behind a [`tokio::sync::RwLock`]; ids are assigned
//! sequentially starting at 1, like a `BIGSERIAL` column.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::TransactionStore;
use crate::domain::{NewTransaction, Transaction};
use crate::error::AppError;

/// Volatile store used when persistence is disabled and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RwLock<Vec<Transaction>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every stored row in insertion order.
    pub async fn all(&self) -> Vec<Transaction> {
        self.rows.read().await.clone()
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn migrate(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn create(&self, record: &NewTransaction) -> Result<Transaction, AppError> {
        let mut rows = self.rows.write().await;
        let id = i64::try_from(rows.len())
            .map_err(|_| AppError::Persistence("transaction id space exhausted".to_string()))?
            .saturating_add(1);
        let stored = Transaction::from_new(id, record.clone());
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let len = self.rows.read().await.len();
        i64::try_from(len).map_err(|e| AppError::Internal(e.to_string()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use chrono::Utc;

    use super::*;

    fn record(customer: &str) -> NewTransaction {
        NewTransaction {
            customer: customer.to_string(),
            quantity: 1,
            price: 2.5,
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let Ok(first) = store.create(&record("a")).await else {
            panic!("insert failed");
        };
        let Ok(second) = store.create(&record("b")).await else {
            panic!("insert failed");
        };
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.customer, "b");
    }

    #[tokio::test]
    async fn migrate_is_idempotent() {
        let store = MemoryStore::new();
        assert!(store.migrate().await.is_ok());
        assert!(store.migrate().await.is_ok());
        assert_eq!(store.count().await, Ok(0));
        assert_eq!(store.ping().await, Ok(()));
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.create(&record(&format!("c{i}"))).await
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            let Ok(Ok(row)) = handle.await else {
                panic!("insert task failed");
            };
            ids.insert(row.id);
        }

        assert_eq!(ids.len(), 32);
        assert_eq!(store.count().await, Ok(32));
        assert_eq!(store.all().await.len(), 32);
    }
}
