use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::repositories::DocumentStore;

/// Keeps documents in insertion order per collection, mirroring the store's
/// natural order.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
}

fn matches(doc: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| doc.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn insert(&self, collection: &str, mut document: Document) -> Result<String, StoreError> {
        let id = ObjectId::new();
        document.insert("_id", id);
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(id.to_hex())
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let mut docs: Vec<Document> = collections
            .get(collection)
            .map(|docs| docs.iter().filter(|d| matches(d, &filter)).cloned().collect())
            .unwrap_or_default();
        if let Some(limit) = limit.filter(|&l| l > 0) {
            docs.truncate(limit as usize);
        }
        Ok(docs)
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = InMemoryStore::default();
        let a = store.insert("menuitem", doc! { "name": "a" }).await.unwrap();
        let b = store.insert("menuitem", doc! { "name": "b" }).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(a.len(), 24);

        let docs = store.find("menuitem", doc! {}, None).await.unwrap();
        assert_eq!(docs.len(), 2);
        assert!(docs.iter().all(|d| d.get_object_id("_id").is_ok()));
    }

    #[tokio::test]
    async fn find_applies_equality_filter() {
        let store = InMemoryStore::default();
        store
            .insert("order", doc! { "table_id": "T-01" })
            .await
            .unwrap();
        store
            .insert("order", doc! { "table_id": "T-02" })
            .await
            .unwrap();

        let docs = store
            .find("order", doc! { "table_id": "T-01" }, None)
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].get_str("table_id").unwrap(), "T-01");
    }

    #[tokio::test]
    async fn find_respects_limit_and_insertion_order() {
        let store = InMemoryStore::default();
        for i in 0..5 {
            store.insert("order", doc! { "seq": i }).await.unwrap();
        }
        let docs = store.find("order", doc! {}, Some(3)).await.unwrap();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0].get_i32("seq").unwrap(), 0);
        assert_eq!(docs[2].get_i32("seq").unwrap(), 2);
    }

    #[tokio::test]
    async fn find_on_missing_collection_returns_empty() {
        let store = InMemoryStore::default();
        let docs = store.find("menuitem", doc! {}, None).await.unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn collection_names_lists_seen_collections() {
        let store = InMemoryStore::default();
        store.insert("menuitem", doc! { "name": "a" }).await.unwrap();
        store.insert("order", doc! { "table_id": "T-01" }).await.unwrap();
        let mut names = store.collection_names().await.unwrap();
        names.sort();
        assert_eq!(names, vec!["menuitem".to_string(), "order".to_string()]);
    }
}
