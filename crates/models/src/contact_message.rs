use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::errors::ModelError;

/// A contact form submission, stored in the `contact_messages` collection.
/// Created only through the write facade and never mutated or read back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(
        alias = "_id",
        with = "crate::oid",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Stamped with the server's processing time; clients cannot supply it.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub submission_date: DateTime<Utc>,
}

impl Document for ContactMessage {
    const COLLECTION: &'static str = "contact_messages";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("Name is required".into()));
    }
    let len = name.chars().count();
    if !(2..=100).contains(&len) {
        return Err(ModelError::Validation(
            "Name must be between 2 and 100 characters".into(),
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if email.trim().is_empty() {
        return Err(ModelError::Validation("Email is required".into()));
    }
    if !is_rfc_shaped(email) {
        return Err(ModelError::Validation("Email must be valid".into()));
    }
    Ok(())
}

pub fn validate_message(message: &str) -> Result<(), ModelError> {
    if message.trim().is_empty() {
        return Err(ModelError::Validation("Message is required".into()));
    }
    let len = message.chars().count();
    if !(10..=1000).contains(&len) {
        return Err(ModelError::Validation(
            "Message must be between 10 and 1000 characters".into(),
        ));
    }
    Ok(())
}

/// Shape check only: non-empty local part and a dotted domain, no whitespace.
/// Deliverability is out of scope.
fn is_rfc_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
        return false;
    }
    true
}
