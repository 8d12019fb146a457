//! OpenAPI document assembled from the handler annotations.

use utoipa::OpenApi;

use crate::api::dto::{HealthResponse, MessageResponse};
use crate::api::handlers::{system, transaction};
use crate::domain::{BatchRequest, NewTransaction};
use crate::error::{ErrorBody, ErrorResponse};

/// OpenAPI description of every public endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "transaction-api",
        description = "Batch ingestion of transaction records into PostgreSQL."
    ),
    paths(
        system::home,
        system::health_handler,
        transaction::add_transactions,
    ),
    components(schemas(
        BatchRequest,
        NewTransaction,
        MessageResponse,
        HealthResponse,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "Transactions", description = "Batch ingest"),
        (name = "System", description = "Greeting and health"),
    )
)]
pub struct ApiDoc;

/// Swagger UI serving [`ApiDoc`].
#[cfg(feature = "swagger-ui")]
#[must_use]
pub fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}
