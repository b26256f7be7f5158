use async_trait::async_trait;
use mongodb::bson::Document;

#[derive(Debug, thiserror::Error)]
pub enum SeedTargetError {
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Database error: {0}")]
    Database(String),
}

/// A collection that can be wiped and bulk-loaded
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedTargetPort: Send + Sync {
    /// Delete every document, returning how many were removed
    async fn clear(&self) -> Result<u64, SeedTargetError>;

    /// Insert all documents in a single bulk write, returning how many were written
    async fn insert_all(&self, documents: Vec<Document>) -> Result<u64, SeedTargetError>;
}
