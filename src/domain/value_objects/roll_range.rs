use serde::{Deserialize, Serialize};

/// Inclusive range of die results that selects a table row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRange {
    pub min: i32,
    pub max: i32,
}
