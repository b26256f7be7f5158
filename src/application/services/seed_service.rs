//! Seed Service - Replaces a collection's contents with a freshly loaded dataset
//!
//! The replace is unconditional: every existing document is deleted before
//! the new ones are written, so seeding the same dataset twice leaves a
//! single copy of each record.

use mongodb::bson::Document;
use tracing::{info, instrument, warn};

use crate::application::ports::outbound::{SeedTargetError, SeedTargetPort};

/// Outcome of one replace-and-load run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub deleted: u64,
    pub inserted: u64,
}

pub struct SeedService<T: SeedTargetPort> {
    target: T,
}

impl<T: SeedTargetPort> SeedService<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    /// Delete everything in the target, then bulk-insert `documents`
    #[instrument(skip(self, documents), fields(documents = documents.len()))]
    pub async fn replace_collection(
        &self,
        documents: Vec<Document>,
    ) -> Result<SeedReport, SeedTargetError> {
        let deleted = self.target.clear().await?;
        info!(deleted, "Cleared existing documents");

        // The driver rejects an empty bulk insert
        let inserted = if documents.is_empty() {
            warn!("Dataset is empty, collection left empty");
            0
        } else {
            self.target.insert_all(documents).await?
        };
        info!(inserted, "Inserted documents");

        Ok(SeedReport { deleted, inserted })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use mockall::Sequence;
    use mongodb::bson::{doc, oid::ObjectId};

    use super::*;
    use crate::application::ports::outbound::MockSeedTargetPort;
    use crate::application::services::DatasetLoader;
    use crate::domain::value_objects::Dataset;

    /// Collection kept in memory, behaving like the MongoDB adapter
    #[derive(Clone, Default)]
    struct InMemoryCollection {
        documents: Arc<Mutex<Vec<Document>>>,
    }

    impl InMemoryCollection {
        fn snapshot(&self) -> Vec<Document> {
            self.documents.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SeedTargetPort for InMemoryCollection {
        async fn clear(&self) -> Result<u64, SeedTargetError> {
            let mut documents = self.documents.lock().unwrap();
            let deleted = documents.len() as u64;
            documents.clear();
            Ok(deleted)
        }

        async fn insert_all(&self, new: Vec<Document>) -> Result<u64, SeedTargetError> {
            let inserted = new.len() as u64;
            self.documents.lock().unwrap().extend(new);
            Ok(inserted)
        }
    }

    fn ids(documents: &[Document]) -> HashSet<ObjectId> {
        documents
            .iter()
            .map(|d| d.get_object_id("_id").unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_clear_runs_before_insert() {
        let mut target = MockSeedTargetPort::new();
        let mut seq = Sequence::new();
        target
            .expect_clear()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(4));
        target
            .expect_insert_all()
            .withf(|documents| documents.len() == 2)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|documents| Ok(documents.len() as u64));

        let service = SeedService::new(target);
        let report = service
            .replace_collection(vec![doc! { "name": "Orc" }, doc! { "name": "Goblin" }])
            .await
            .unwrap();

        assert_eq!(report, SeedReport { deleted: 4, inserted: 2 });
    }

    #[tokio::test]
    async fn test_empty_dataset_skips_insert() {
        let mut target = MockSeedTargetPort::new();
        target.expect_clear().times(1).returning(|| Ok(7));
        target.expect_insert_all().never();

        let report = SeedService::new(target)
            .replace_collection(Vec::new())
            .await
            .unwrap();

        assert_eq!(report, SeedReport { deleted: 7, inserted: 0 });
    }

    #[tokio::test]
    async fn test_clear_failure_stops_the_run() {
        let mut target = MockSeedTargetPort::new();
        target
            .expect_clear()
            .returning(|| Err(SeedTargetError::Database("not primary".to_string())));
        target.expect_insert_all().never();

        let err = SeedService::new(target)
            .replace_collection(vec![doc! { "name": "Orc" }])
            .await
            .unwrap_err();

        assert!(err.to_string().contains("not primary"));
    }

    #[tokio::test]
    async fn test_seeding_twice_replaces_instead_of_duplicating() {
        let collection = InMemoryCollection::default();
        collection
            .documents
            .lock()
            .unwrap()
            .push(doc! { "name": "Leftover" });
        let loader = DatasetLoader::new("data");
        let service = SeedService::new(collection.clone());

        let first = service
            .replace_collection(loader.load(Dataset::Backgrounds).unwrap())
            .await
            .unwrap();
        let first_ids = ids(&collection.snapshot());

        let second = service
            .replace_collection(loader.load(Dataset::Backgrounds).unwrap())
            .await
            .unwrap();
        let stored = collection.snapshot();

        assert_eq!(first, SeedReport { deleted: 1, inserted: 100 });
        assert_eq!(second, SeedReport { deleted: 100, inserted: 100 });
        assert_eq!(stored.len(), 100);
        assert_eq!(stored[0].get_str("name").unwrap(), "Alchemist");

        let expected: Vec<String> = loader
            .load(Dataset::Backgrounds)
            .unwrap()
            .iter()
            .map(|d| d.get_str("name").unwrap().to_string())
            .collect();
        let names: Vec<&str> = stored.iter().map(|d| d.get_str("name").unwrap()).collect();
        assert_eq!(names, expected);
        assert!(ids(&stored).is_disjoint(&first_ids));
    }
}
