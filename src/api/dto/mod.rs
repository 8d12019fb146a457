//! Data Transfer Objects for REST responses.
//!
//! The request body of `POST /transaction` is
//! [`crate::domain::BatchRequest`]; it is decoded directly into the domain
//! type.

pub mod response_dto;

pub use response_dto::*;
