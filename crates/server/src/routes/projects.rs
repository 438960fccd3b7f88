use axum::extract::{Path, State};
use axum::Json;
use mongodb::bson::Bson;

use models::project::{Project, ProjectStatus};

use crate::errors::ApiError;
use crate::state::ServerState;

/// GET /api/v1/projects
pub async fn list_projects(
    State(state): State<ServerState>,
) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(state.projects.find_all().await?))
}

/// GET /api/v1/projects/:id
pub async fn get_project(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    match state.projects.find_by_id(&id).await? {
        Some(project) => Ok(Json(project)),
        None => Err(ApiError::NotFound),
    }
}

/// GET /api/v1/projects/status/:status
///
/// The token is parsed before the store is touched; an unknown one is a 400,
/// not an empty list.
pub async fn list_projects_by_status(
    State(state): State<ServerState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let status: ProjectStatus = status.parse()?;
    let projects = state
        .projects
        .find_by_field("status", Bson::String(status.as_str().to_string()))
        .await?;
    Ok(Json(projects))
}
