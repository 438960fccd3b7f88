use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId, Bson};
use serde::Serialize;
use tokio::sync::RwLock;

use models::document::Document;

use crate::collection::Collection;
use crate::errors::ServiceError;

/// In-memory collection backing the HTTP test suite and database-less local
/// runs. Mirrors the store's behavior of assigning fresh ObjectId hex
/// identifiers on save.
pub struct MemoryCollection<T> {
    docs: RwLock<Vec<T>>,
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self {
            docs: RwLock::new(Vec::new()),
        }
    }
}

impl<T> MemoryCollection<T>
where
    T: Document + Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl<T> Collection<T> for MemoryCollection<T>
where
    T: Document + Clone + Serialize + Send + Sync,
{
    async fn find_all(&self) -> Result<Vec<T>, ServiceError> {
        Ok(self.docs.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, ServiceError> {
        let docs = self.docs.read().await;
        Ok(docs.iter().find(|d| d.id() == Some(id)).cloned())
    }

    async fn find_by_field(&self, field: &str, value: Bson) -> Result<Vec<T>, ServiceError> {
        let docs = self.docs.read().await;
        let mut found = Vec::new();
        for doc in docs.iter() {
            let serialized =
                bson::to_document(doc).map_err(|e| ServiceError::Db(e.to_string()))?;
            if serialized.get(field) == Some(&value) {
                found.push(doc.clone());
            }
        }
        Ok(found)
    }

    async fn save(&self, mut doc: T) -> Result<T, ServiceError> {
        if doc.id().is_none() {
            doc.set_id(ObjectId::new().to_hex());
        }
        self.docs.write().await.push(doc.clone());
        Ok(doc)
    }
}
