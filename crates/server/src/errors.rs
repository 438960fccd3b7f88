use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use models::errors::ModelError;
use service::contact::{ContactError, FieldError};
use service::errors::ServiceError;

/// Boundary error taxonomy: client validation failures become 400s, absence
/// becomes an empty 404, infrastructure faults become generic 500s.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    FieldErrors(Vec<FieldError>),
    NotFound,
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": msg })),
            )
                .into_response(),
            ApiError::FieldErrors(errors) => {
                let mut fields = serde_json::Map::new();
                for e in errors {
                    fields.insert(e.field.to_string(), serde_json::Value::String(e.message));
                }
                (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({ "errors": fields })),
                )
                    .into_response()
            }
            // Absence is not a failure; no body, just the status.
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Internal(msg) => {
                error!(error = %msg, "infrastructure error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<ModelError> for ApiError {
    fn from(e: ModelError) -> Self {
        let ModelError::Validation(msg) = e;
        ApiError::BadRequest(msg)
    }
}

impl From<ContactError> for ApiError {
    fn from(e: ContactError) -> Self {
        match e {
            ContactError::Invalid(errors) => ApiError::FieldErrors(errors),
            ContactError::Service(e) => e.into(),
        }
    }
}
