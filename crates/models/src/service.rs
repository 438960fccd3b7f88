use serde::{Deserialize, Serialize};

use crate::document::Document;

/// A service offering, stored in the `services` collection. The icon
/// identifier is an opaque token the presentation layer resolves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(
        alias = "_id",
        with = "crate::oid",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub icon_identifier: String,
}

impl Document for Service {
    const COLLECTION: &'static str = "services";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
