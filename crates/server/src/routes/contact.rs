use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use service::contact::ContactRequest;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub id: String,
}

/// POST /api/v1/contact
pub async fn submit_contact_message(
    State(state): State<ServerState>,
    Json(request): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), ApiError> {
    let saved = state.contact.submit(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            success: true,
            message: "Thank you for contacting us! We'll get back to you soon.".to_string(),
            id: saved.id.unwrap_or_default(),
        }),
    ))
}
