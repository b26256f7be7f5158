//! Value objects - Immutable objects defined by their attributes

mod dataset;
mod roll_range;

pub use dataset::{Dataset, DatasetSource, UnknownDataset};
pub use roll_range::RollRange;
