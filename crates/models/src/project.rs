use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::errors::ModelError;

/// A portfolio project, stored in the `projects` collection. Read-only from
/// this API's point of view; records are seeded out of band.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(
        alias = "_id",
        with = "crate::oid",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub status: ProjectStatus,
    pub technologies: Vec<String>,
}

impl Document for Project {
    const COLLECTION: &'static str = "projects";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

/// Closed set of project states. Unknown tokens are rejected at the boundary,
/// never coerced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Completed,
    Upcoming,
    InProgress,
}

impl ProjectStatus {
    /// The wire/storage form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "COMPLETED",
            ProjectStatus::Upcoming => "UPCOMING",
            ProjectStatus::InProgress => "IN_PROGRESS",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = ModelError;

    // Exact tokens only; lowercase or mixed-case forms are unknown.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COMPLETED" => Ok(ProjectStatus::Completed),
            "UPCOMING" => Ok(ProjectStatus::Upcoming),
            "IN_PROGRESS" => Ok(ProjectStatus::InProgress),
            _ => Err(ModelError::Validation(format!(
                "unknown project status: {}",
                s
            ))),
        }
    }
}
