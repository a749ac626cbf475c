use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps per-request failures to HTTP status codes and JSON error bodies.
/// An absent field is an expected outcome and is not logged as an error;
/// upstream read failures are logged here for operational visibility.
#[derive(Debug)]
pub enum ApiError {
    /// Requested field is not present for the entity
    FieldNotFound { entity_id: String, field: String },
    /// Upstream read failed (transport, permission, or service error)
    Upstream(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::FieldNotFound { entity_id, field } => (
                StatusCode::NOT_FOUND,
                format!("{} not found for {}", field, entity_id),
            ),
            ApiError::Upstream(err) => {
                // "{:#}" flattens the context chain so the transport failure
                // message reaches the response body.
                let message = format!("Error fetching data from Firebase: {:#}", err);
                tracing::error!("{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Upstream(err)
    }
}
