//! End-to-end tests over a real TCP socket.

#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::json;
use transaction_api::api::build_router;
use transaction_api::app_state::AppState;
use transaction_api::config::DEFAULT_MAX_BODY_BYTES;
use transaction_api::persistence::{MemoryStore, TransactionStore};

async fn spawn_server() -> (SocketAddr, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let shared: Arc<dyn TransactionStore> = Arc::<MemoryStore>::clone(&store);
    let app =
        build_router(Some(DEFAULT_MAX_BODY_BYTES)).with_state(AppState::new(shared, None));

    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind ephemeral port");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("local addr");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (addr, store)
}

#[tokio::test]
async fn two_record_batch_is_stored_before_response() {
    let (addr, store) = spawn_server().await;
    let payload = json!({
        "request_id": 12345,
        "data": [
            {
                "customer": "John Smith",
                "quantity": 2,
                "price": 10.50,
                "timestamp": "2024-01-01T00:00:00Z"
            },
            {
                "customer": "Jane Doe",
                "quantity": 1,
                "price": 5.25,
                "timestamp": "2024-01-01T00:00:00Z"
            }
        ]
    });

    let client = reqwest::Client::new();
    let Ok(response) = client
        .post(format!("http://{addr}/transaction"))
        .json(&payload)
        .send()
        .await
    else {
        panic!("request failed");
    };

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let Ok(body) = response.json::<serde_json::Value>().await else {
        panic!("json body");
    };
    assert_eq!(body, json!({"message": "Data transaction berhasil dimasukkan"}));

    // No waiting: the handler joined on both inserts.
    assert_eq!(store.count().await, Ok(2));

    let mut customers: Vec<String> = store.all().await.into_iter().map(|t| t.customer).collect();
    customers.sort();
    assert_eq!(customers, vec!["Jane Doe", "John Smith"]);
}

#[tokio::test]
async fn large_batch_is_stored_once_per_record() {
    let (addr, store) = spawn_server().await;
    let data: Vec<_> = (0..50)
        .map(|i| json!({"customer": format!("c{i}"), "quantity": i, "price": 1.0}))
        .collect();

    let client = reqwest::Client::new();
    let Ok(response) = client
        .post(format!("http://{addr}/transaction"))
        .json(&json!({"request_id": 2, "data": data}))
        .send()
        .await
    else {
        panic!("request failed");
    };

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(store.count().await, Ok(50));
}

#[tokio::test]
async fn malformed_body_yields_400_and_no_rows() {
    let (addr, store) = spawn_server().await;

    let client = reqwest::Client::new();
    let Ok(response) = client
        .post(format!("http://{addr}/transaction"))
        .body("not json")
        .send()
        .await
    else {
        panic!("request failed");
    };

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let Ok(text) = response.text().await else {
        panic!("text body");
    };
    assert!(text.starts_with("expected"), "unexpected message: {text}");
    assert_eq!(store.count().await, Ok(0));
}

#[tokio::test]
async fn home_greets() {
    let (addr, _store) = spawn_server().await;

    let Ok(response) = reqwest::get(format!("http://{addr}/")).await else {
        panic!("request failed");
    };

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let Ok(text) = response.text().await else {
        panic!("text body");
    };
    assert_eq!(text, "Welcome to transaction API!");
}
