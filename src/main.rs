//! Shadowdark Seed - Loads TTRPG reference tables into MongoDB
//!
//! Each run replaces one collection with one dataset:
//! - Resolves the connection from arguments, environment and defaults
//! - Loads the dataset, embedded or from the data directory
//! - Deletes every document in the collection, then bulk-inserts the dataset

mod application;
mod domain;
mod infrastructure;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::services::{DatasetLoader, SeedService};
use crate::domain::value_objects::Dataset;
use crate::infrastructure::config::SeedConfig;
use crate::infrastructure::persistence::MongoSeedTarget;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout only carries progress lines
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shadowdark_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dataset, rest) = split_dataset(&args)?;

    let config = SeedConfig::from_env(dataset, &rest)?;
    tracing::debug!(?config, "Configuration resolved");

    let loader = DatasetLoader::new(&config.data_dir);
    let documents = loader
        .load(dataset)
        .with_context(|| format!("Failed to load the {dataset} dataset"))?;

    let target =
        MongoSeedTarget::connect(&config.mongo_uri, &config.database, &config.collection).await?;
    tracing::info!(
        %dataset,
        namespace = %target.namespace(),
        data_dir = %loader.data_dir().display(),
        "Connected"
    );

    println!(
        "Seeding {} in {} at {}",
        config.collection, config.database, config.mongo_uri
    );
    let report = SeedService::new(target)
        .replace_collection(documents)
        .await
        .with_context(|| format!("Failed to seed {}.{}", config.database, config.collection))?;
    tracing::info!(
        deleted = report.deleted,
        inserted = report.inserted,
        "Seed complete"
    );
    println!("Done.");

    Ok(())
}

/// Take the first non-flag argument as the dataset; the rest configure the run
fn split_dataset(args: &[String]) -> Result<(Dataset, Vec<String>)> {
    let position = args
        .iter()
        .position(|arg| !arg.starts_with("--"))
        .with_context(usage)?;

    let dataset = args[position].parse::<Dataset>().with_context(usage)?;
    let mut rest = args.to_vec();
    rest.remove(position);

    Ok((dataset, rest))
}

fn usage() -> String {
    format!(
        "usage: shadowdark-seed <dataset> [mongodb://...] [db=<name>] [collection=<name>]\n\
         datasets: {}",
        Dataset::names().join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_split_dataset() {
        let (dataset, rest) =
            split_dataset(&args(&["--verbose", "spells", "db=test", "collection=S"])).unwrap();

        assert_eq!(dataset, Dataset::Spells);
        assert_eq!(rest, args(&["--verbose", "db=test", "collection=S"]));
    }

    #[test]
    fn test_missing_dataset_shows_usage() {
        let err = split_dataset(&args(&["--verbose"])).unwrap_err();
        assert!(err.to_string().contains("settlement-names"));
    }

    #[test]
    fn test_unknown_dataset() {
        let err = split_dataset(&args(&["mongodb://localhost:27017"])).unwrap_err();

        assert!(err.to_string().starts_with("usage:"));
        assert!(format!("{err:#}").contains("unknown dataset"));
    }
}
