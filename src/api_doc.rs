use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-firebase-lookup API",
        version = "1.0.0",
        description = "A read-only entity field lookup service backed by Firebase Realtime Database"
    ),
    paths(
        handlers::health::health_handler,
        handlers::lookup::lookup_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "lookup", description = "Entity field lookup operations")
    )
)]
pub struct ApiDoc;
