use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use models::contact_message::{self, ContactMessage};
use models::errors::ModelError;

use crate::collection::Collection;
use crate::errors::ServiceError;

/// Incoming contact form payload. Exactly three fields; identifier and
/// submission date are server-assigned and cannot be supplied by the client.
/// Omitted fields deserialize as empty so they reach the validators and come
/// back as field-level errors instead of a deserialization failure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// One human-readable violation for one field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("contact validation failed")]
    Invalid(Vec<FieldError>),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Contact write facade: validate, stamp the submission time, persist.
/// Fire-and-forget — no notification, deduplication or spam filtering.
pub struct ContactService {
    messages: Arc<dyn Collection<ContactMessage>>,
}

impl ContactService {
    pub fn new(messages: Arc<dyn Collection<ContactMessage>>) -> Self {
        Self { messages }
    }

    /// Run every field check in order, collecting one message per invalid
    /// field rather than stopping at the first.
    pub fn validate(request: &ContactRequest) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if let Err(e) = contact_message::validate_name(&request.name) {
            errors.push(violation("name", e));
        }
        if let Err(e) = contact_message::validate_email(&request.email) {
            errors.push(violation("email", e));
        }
        if let Err(e) = contact_message::validate_message(&request.message) {
            errors.push(violation("message", e));
        }
        errors
    }

    pub async fn submit(&self, request: ContactRequest) -> Result<ContactMessage, ContactError> {
        let errors = Self::validate(&request);
        if !errors.is_empty() {
            return Err(ContactError::Invalid(errors));
        }
        let message = ContactMessage {
            id: None,
            name: request.name,
            email: request.email,
            message: request.message,
            submission_date: Utc::now(),
        };
        let saved = self.messages.save(message).await?;
        info!(id = saved.id.as_deref().unwrap_or(""), "contact message stored");
        Ok(saved)
    }
}

fn violation(field: &'static str, err: ModelError) -> FieldError {
    let ModelError::Validation(message) = err;
    FieldError { field, message }
}
