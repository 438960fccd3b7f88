use axum::extract::{Path, State};
use axum::Json;

use models::team_member::TeamMember;

use crate::errors::ApiError;
use crate::state::ServerState;

/// GET /api/v1/team
pub async fn list_team_members(
    State(state): State<ServerState>,
) -> Result<Json<Vec<TeamMember>>, ApiError> {
    Ok(Json(state.team.find_all().await?))
}

/// GET /api/v1/team/:id
pub async fn get_team_member(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<TeamMember>, ApiError> {
    match state.team.find_by_id(&id).await? {
        Some(member) => Ok(Json(member)),
        None => Err(ApiError::NotFound),
    }
}
