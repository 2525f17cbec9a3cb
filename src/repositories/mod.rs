pub mod in_memory;
pub mod mongo;

use async_trait::async_trait;
use bson::Document;

use crate::errors::StoreError;

/// Generic accessor over a named-collection document database.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts one document into the named collection and returns the
    /// store-generated identifier as a hex string.
    async fn insert(&self, collection: &str, document: Document) -> Result<String, StoreError>;

    /// Returns documents matching an equality filter, in the store's natural
    /// order, up to `limit` when given. Returned documents keep their `_id`.
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, StoreError>;

    async fn collection_names(&self) -> Result<Vec<String>, StoreError>;
}
