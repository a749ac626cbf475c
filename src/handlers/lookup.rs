use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};
use serde_json::{Map, Value as JsonValue};

/// GET /api/:entity_id/:field handler - Look up one field of one entity
///
/// Performs a single point read against the remote database and maps the
/// outcome: a present value becomes a 200 with a single-key body, an absent
/// path becomes a 404, and any read failure becomes a 500.
#[utoipa::path(
    get,
    path = routes::ENTITY_FIELD,
    params(
        ("entity_id" = String, Path, description = "Entity identifier"),
        ("field" = String, Path, description = "Field name nested under the entity")
    ),
    responses(
        (status = 200, description = "Field found; body maps the field name to its stored value", body = serde_json::Value),
        (status = 404, description = "Field not present for the entity", body = ErrorResponse),
        (status = 500, description = "Upstream read failed", body = ErrorResponse)
    ),
    tag = "lookup"
)]
pub async fn lookup_handler(
    State(state): State<AppState>,
    Path((entity_id, field)): Path<(String, String)>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    match state
        .firebase_client
        .read_entity_field(&entity_id, &field)
        .await?
    {
        Some(value) => {
            tracing::info!("Resolved {} for entity {}", field, entity_id);
            let mut body = Map::new();
            body.insert(field, value);
            Ok((StatusCode::OK, Json(JsonValue::Object(body))))
        }
        None => {
            tracing::info!("No {} stored for entity {}", field, entity_id);
            Err(ApiError::FieldNotFound { entity_id, field })
        }
    }
}
