use serde::{Deserialize, Serialize};

use crate::document::Document;

/// A team member profile, stored in the `team_members` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(
        alias = "_id",
        with = "crate::oid",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub id: Option<String>,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub profile_image_url: String,
}

impl Document for TeamMember {
    const COLLECTION: &'static str = "team_members";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
