use axum::extract::{Path, State};
use axum::Json;

use models::service::Service;

use crate::errors::ApiError;
use crate::state::ServerState;

/// GET /api/v1/services
pub async fn list_services(
    State(state): State<ServerState>,
) -> Result<Json<Vec<Service>>, ApiError> {
    Ok(Json(state.services.find_all().await?))
}

/// GET /api/v1/services/:id
pub async fn get_service(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Service>, ApiError> {
    match state.services.find_by_id(&id).await? {
        Some(service) => Ok(Json(service)),
        None => Err(ApiError::NotFound),
    }
}
