//! # transaction-api
//!
//! HTTP service that accepts batches of transaction records and persists
//! them to PostgreSQL.
//!
//! Each record of a batch is inserted by its own Tokio task; the handler
//! joins on all of them before answering. Individual insert failures are
//! logged and never change the response.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── IngestService (service/)   one task per record, joined
//!     │
//!     ├── TransactionStore (persistence/)
//!     │
//!     └── PostgreSQL  |  in-memory store
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
