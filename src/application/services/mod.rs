//! Application services - Use case implementations
//!
//! Loading a dataset and replacing a collection with it are kept apart so
//! the replace step can run against any `SeedTargetPort`.

pub mod dataset_loader;
pub mod seed_service;

pub use dataset_loader::{DatasetError, DatasetLoader};
pub use seed_service::{SeedReport, SeedService};
