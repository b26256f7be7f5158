//! Background entity - A row of the character background table

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RollRange;

/// A character background, rolled on a d1000
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub name: String,
    /// Die results that select this background
    pub range: RollRange,
    /// Starting gear, `;`-separated
    pub possessions: String,
    pub details: String,
}
