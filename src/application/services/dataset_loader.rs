//! Dataset Loader - Turns a reference table into insert-ready documents
//!
//! Embedded tables go through their typed entities; file tables are passed
//! through as raw JSON objects. Either way every field reaches the document
//! unchanged and a fresh `_id` is put in front.

use std::fs;
use std::path::{Path, PathBuf};

use mongodb::bson::{self, doc, oid::ObjectId, Document};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use crate::domain::entities::{Background, Spell};
use crate::domain::value_objects::{Dataset, DatasetSource};

/// Untyped record from a file-backed table
type RawRecord = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Record {index} of {origin} cannot be stored as BSON: {source}")]
    Bson {
        origin: String,
        index: usize,
        #[source]
        source: bson::ser::Error,
    },
}

/// Loads datasets, resolving file-backed tables against a data directory
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    data_dir: PathBuf,
}

impl DatasetLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load every record of `dataset` as a document with a freshly generated `_id`
    #[instrument(skip(self), fields(data_dir = %self.data_dir.display()))]
    pub fn load(&self, dataset: Dataset) -> Result<Vec<Document>, DatasetError> {
        let documents = match (dataset, dataset.source()) {
            (Dataset::Backgrounds, DatasetSource::Embedded(json)) => {
                let backgrounds: Vec<Background> = parse(dataset.name(), json)?;
                to_documents(dataset.name(), &backgrounds)?
            }
            (Dataset::Spells, DatasetSource::Embedded(json)) => {
                let spells: Vec<Spell> = parse(dataset.name(), json)?;
                to_documents(dataset.name(), &spells)?
            }
            (_, DatasetSource::Embedded(json)) => {
                let records: Vec<RawRecord> = parse(dataset.name(), json)?;
                to_documents(dataset.name(), &records)?
            }
            (_, DatasetSource::File(file_name)) => {
                let path = self.data_dir.join(file_name);
                debug!(path = %path.display(), "Reading dataset file");
                let json = fs::read_to_string(&path).map_err(|source| DatasetError::Read {
                    path: path.clone(),
                    source,
                })?;
                let origin = path.display().to_string();
                let records: Vec<RawRecord> = parse(&origin, &json)?;
                to_documents(&origin, &records)?
            }
        };

        info!(records = documents.len(), "Loaded dataset");
        Ok(documents)
    }
}

fn parse<T: DeserializeOwned>(origin: &str, json: &str) -> Result<Vec<T>, DatasetError> {
    serde_json::from_str(json).map_err(|source| DatasetError::Parse {
        origin: origin.to_string(),
        source,
    })
}

fn to_documents<T: Serialize>(origin: &str, records: &[T]) -> Result<Vec<Document>, DatasetError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            bson::to_document(record)
                .map(with_fresh_id)
                .map_err(|source| DatasetError::Bson {
                    origin: origin.to_string(),
                    index,
                    source,
                })
        })
        .collect()
}

/// Prefix a new ObjectId; any `_id` carried by the source record is replaced
fn with_fresh_id(record: Document) -> Document {
    let mut document = doc! { "_id": ObjectId::new() };
    for (key, value) in record {
        if key != "_id" {
            document.insert(key, value);
        }
    }
    document
}
