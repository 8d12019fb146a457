//! `PostgresStore` against a live database.
//!
//! Runs only when `TEST_DATABASE_URL` points at a disposable PostgreSQL
//! database; otherwise each test returns immediately.

#![allow(clippy::panic)]

use chrono::{TimeZone, Utc};
use transaction_api::config::DatabaseConfig;
use transaction_api::domain::NewTransaction;
use transaction_api::persistence::{PostgresStore, TransactionStore};

async fn store() -> Option<PostgresStore> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let config = DatabaseConfig {
        url: Some(url),
        ..DatabaseConfig::default()
    };
    let Ok(store) = PostgresStore::connect(&config).await else {
        panic!("TEST_DATABASE_URL is set but unreachable");
    };
    if let Err(err) = store.migrate().await {
        panic!("migration failed: {err}");
    }
    Some(store)
}

#[tokio::test]
async fn migrate_twice_is_harmless() {
    let Some(store) = store().await else {
        return;
    };
    assert!(store.migrate().await.is_ok());
}

#[tokio::test]
async fn ping_succeeds_on_live_pool() {
    let Some(store) = store().await else {
        return;
    };
    assert!(store.ping().await.is_ok());
}

#[tokio::test]
async fn create_assigns_id_and_bumps_count() {
    let Some(store) = store().await else {
        return;
    };
    let Ok(before) = store.count().await else {
        panic!("count failed");
    };

    let record = NewTransaction {
        customer: "John Smith".to_string(),
        quantity: 2,
        price: 10.5,
        timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_else(Utc::now),
    };
    let Ok(stored) = store.create(&record).await else {
        panic!("insert failed");
    };

    assert!(stored.id > 0);
    assert_eq!(stored.customer, "John Smith");
    // Other tests may insert concurrently into the same table.
    let Ok(after) = store.count().await else {
        panic!("count failed");
    };
    assert!(after > before);
}
