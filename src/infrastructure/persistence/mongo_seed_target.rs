//! MongoDB implementation of the seed target port

use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};
use tracing::debug;

use crate::application::ports::outbound::{SeedTargetError, SeedTargetPort};

/// A single MongoDB collection opened for seeding
pub struct MongoSeedTarget {
    collection: Collection<Document>,
}

impl MongoSeedTarget {
    /// Open `database.collection`; the driver connects lazily on first use
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
    ) -> Result<Self, SeedTargetError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| SeedTargetError::Connection(e.to_string()))?;
        let collection = client.database(database).collection::<Document>(collection);

        debug!(namespace = %collection.namespace(), "Opened collection");
        Ok(Self { collection })
    }

    pub fn namespace(&self) -> String {
        self.collection.namespace().to_string()
    }
}

#[async_trait]
impl SeedTargetPort for MongoSeedTarget {
    async fn clear(&self) -> Result<u64, SeedTargetError> {
        let result = self
            .collection
            .delete_many(doc! {})
            .await
            .map_err(|e| SeedTargetError::Database(e.to_string()))?;

        Ok(result.deleted_count)
    }

    async fn insert_all(&self, documents: Vec<Document>) -> Result<u64, SeedTargetError> {
        let result = self
            .collection
            .insert_many(documents)
            .await
            .map_err(|e| SeedTargetError::Database(e.to_string()))?;

        Ok(result.inserted_ids.len() as u64)
    }
}
