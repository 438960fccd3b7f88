use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson};
use mongodb::Database;
use serde::de::DeserializeOwned;
use serde::Serialize;

use models::document::Document;

use crate::collection::Collection;
use crate::errors::ServiceError;

/// MongoDB-backed collection access. One instance per entity type, all
/// sharing the driver's pooled connection.
///
/// The driver's `Collection<T>` itself demands `Send + Sync` payloads.
pub struct MongoCollection<T: Send + Sync> {
    inner: mongodb::Collection<T>,
}

impl<T> MongoCollection<T>
where
    T: Document + Send + Sync,
{
    pub fn new(db: &Database) -> Self {
        Self {
            inner: db.collection(T::COLLECTION),
        }
    }
}

#[async_trait]
impl<T> Collection<T> for MongoCollection<T>
where
    T: Document + Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    async fn find_all(&self) -> Result<Vec<T>, ServiceError> {
        let cursor = self.inner.find(doc! {}).await.map_err(db_err)?;
        cursor.try_collect().await.map_err(db_err)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, ServiceError> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        self.inner
            .find_one(doc! { "_id": oid })
            .await
            .map_err(db_err)
    }

    async fn find_by_field(&self, field: &str, value: Bson) -> Result<Vec<T>, ServiceError> {
        let mut filter = mongodb::bson::Document::new();
        filter.insert(field, value);
        let cursor = self.inner.find(filter).await.map_err(db_err)?;
        cursor.try_collect().await.map_err(db_err)
    }

    async fn save(&self, mut doc: T) -> Result<T, ServiceError> {
        let result = self.inner.insert_one(&doc).await.map_err(db_err)?;
        if let Bson::ObjectId(oid) = result.inserted_id {
            doc.set_id(oid.to_hex());
        }
        Ok(doc)
    }
}

fn db_err(e: mongodb::error::Error) -> ServiceError {
    ServiceError::Db(e.to_string())
}
