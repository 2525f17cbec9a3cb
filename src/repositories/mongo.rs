use async_trait::async_trait;
use bson::{Bson, Document};
use futures_util::TryStreamExt;
use mongodb::{Client, Database};

use crate::errors::StoreError;
use crate::repositories::DocumentStore;

#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Reads DATABASE_URL and DATABASE_NAME. Either missing means the process
    /// runs without a store and every accessor call fails as unavailable.
    pub async fn from_env() -> Result<Option<Self>, StoreError> {
        let (Ok(url), Ok(name)) = (
            std::env::var("DATABASE_URL"),
            std::env::var("DATABASE_NAME"),
        ) else {
            return Ok(None);
        };
        let client = Client::with_uri_str(&url).await?;
        Ok(Some(Self {
            db: client.database(&name),
        }))
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(&self, collection: &str, document: Document) -> Result<String, StoreError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;
        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };
        Ok(id)
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, StoreError> {
        let coll = self.db.collection::<Document>(collection);
        let mut action = coll.find(filter);
        if let Some(limit) = limit {
            action = action.limit(limit);
        }
        let mut cursor = action.await?;
        let mut docs = Vec::new();
        while let Some(doc) = cursor.try_next().await? {
            docs.push(doc);
        }
        Ok(docs)
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.db.list_collection_names().await?)
    }
}
