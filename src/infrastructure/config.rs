//! Seed run configuration
//!
//! Every setting resolves in the same order: command-line argument, then
//! environment variable, then the built-in default. The database name
//! additionally falls back to the path of the connection URI before its
//! default.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use url::Url;

use crate::domain::value_objects::Dataset;

pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017/shadowdark";
pub const DEFAULT_DATABASE: &str = "shadowdark";
pub const DEFAULT_DATA_DIR: &str = "data";

/// Connection and data settings for one seed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    /// MongoDB connection string
    pub mongo_uri: String,
    /// Target database name
    pub database: String,
    /// Target collection name
    pub collection: String,
    /// Directory holding the file-backed datasets
    pub data_dir: PathBuf,
}

impl SeedConfig {
    /// Resolve configuration from arguments and the process environment
    pub fn from_env(dataset: Dataset, args: &[String]) -> Result<Self> {
        Self::resolve(dataset, args, |key| env::var(key).ok())
    }

    /// Resolve configuration from arguments and an environment lookup
    ///
    /// Arguments starting with `--` are ignored. Empty values count as unset.
    pub fn resolve<F>(dataset: Dataset, args: &[String], lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let positional: Vec<&str> = args
            .iter()
            .map(String::as_str)
            .filter(|arg| !arg.starts_with("--"))
            .collect();
        let env = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let mongo_uri = positional
            .iter()
            .find(|arg| arg.starts_with("mongodb"))
            .map(|arg| arg.to_string())
            .or_else(|| env("MONGO_URI"))
            .unwrap_or_else(|| DEFAULT_MONGO_URI.to_string());

        let parsed = Url::parse(&mongo_uri)
            .with_context(|| format!("Invalid MongoDB connection string: {mongo_uri}"))?;

        let database = assignment(&positional, "db")
            .or_else(|| env("MONGO_DB"))
            .or_else(|| database_from_path(&parsed))
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let collection = assignment(&positional, "collection")
            .or_else(|| env("MONGO_COLLECTION"))
            .unwrap_or_else(|| dataset.default_collection().to_string());

        let data_dir = env("SEED_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        Ok(Self {
            mongo_uri,
            database,
            collection,
            data_dir,
        })
    }
}

/// Value of the first `key=value` argument, taken up to any further `=`
fn assignment(args: &[&str], key: &str) -> Option<String> {
    args.iter()
        .find_map(|arg| arg.strip_prefix(key)?.strip_prefix('='))
        .and_then(|value| value.split('=').next())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn database_from_path(uri: &Url) -> Option<String> {
    let path = uri.path();
    let name = path.strip_prefix('/').unwrap_or(path);
    (!name.is_empty()).then(|| name.to_string())
}
