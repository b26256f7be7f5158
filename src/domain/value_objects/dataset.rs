//! Dataset catalogue - every reference table the tool can seed
//!
//! Backgrounds and spells are compiled into the binary. The remaining tables
//! are read from the data directory at run time.

use std::fmt;
use std::str::FromStr;

const BACKGROUNDS_JSON: &str = include_str!("../../../data/backgrounds.json");
const SPELLS_JSON: &str = include_str!("../../../data/spells.json");

/// A reference table that maps onto one MongoDB collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Backgrounds,
    Items,
    Monsters,
    SettlementNames,
    Spells,
    Titles,
}

/// Where a dataset's records come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
    /// JSON compiled into the binary
    Embedded(&'static str),
    /// JSON file name, resolved against the data directory
    File(&'static str),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown dataset '{0}' (expected one of: {names})", names = Dataset::names().join(", "))]
pub struct UnknownDataset(pub String);

impl Dataset {
    pub const ALL: [Dataset; 6] = [
        Dataset::Backgrounds,
        Dataset::Items,
        Dataset::Monsters,
        Dataset::SettlementNames,
        Dataset::Spells,
        Dataset::Titles,
    ];

    /// Name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Backgrounds => "backgrounds",
            Dataset::Items => "items",
            Dataset::Monsters => "monsters",
            Dataset::SettlementNames => "settlement-names",
            Dataset::Spells => "spells",
            Dataset::Titles => "titles",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Dataset::name).collect()
    }

    /// Collection written when neither `collection=` nor `MONGO_COLLECTION` is set
    pub fn default_collection(&self) -> &'static str {
        match self {
            Dataset::Backgrounds => "Backgrounds",
            Dataset::Items => "Items",
            Dataset::Monsters => "Monsters",
            Dataset::SettlementNames => "SettlementNames",
            Dataset::Spells => "Spells",
            Dataset::Titles => "Titles",
        }
    }

    pub fn source(&self) -> DatasetSource {
        match self {
            Dataset::Backgrounds => DatasetSource::Embedded(BACKGROUNDS_JSON),
            Dataset::Spells => DatasetSource::Embedded(SPELLS_JSON),
            Dataset::Items => DatasetSource::File("items.json"),
            Dataset::Monsters => DatasetSource::File("monsters.json"),
            Dataset::SettlementNames => DatasetSource::File("settlement-names.json"),
            Dataset::Titles => DatasetSource::File("titles.json"),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = UnknownDataset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dataset| dataset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDataset(s.to_string()))
    }
}
