use async_trait::async_trait;
use mongodb::bson::Bson;

use models::document::Document;

use crate::errors::ServiceError;

pub mod memory;
pub mod mongo;

/// Generic per-entity collection access: implemented once, instantiated per
/// collection. Reads have no side effects; `save` is used only by the contact
/// write facade. Store-connectivity faults surface as `ServiceError::Db` and
/// are not retried.
#[async_trait]
pub trait Collection<T: Document>: Send + Sync {
    /// Every record in the collection, in the store's natural order.
    async fn find_all(&self) -> Result<Vec<T>, ServiceError>;

    /// Exact identifier match. A malformed identifier is "absent", not an
    /// error.
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, ServiceError>;

    /// All records whose field equals the value exactly.
    async fn find_by_field(&self, field: &str, value: Bson) -> Result<Vec<T>, ServiceError>;

    /// Persist the record, letting the store assign an identifier if absent,
    /// and return the stored form.
    async fn save(&self, doc: T) -> Result<T, ServiceError>;
}
