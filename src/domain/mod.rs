//! Domain layer - Reference data with no external dependencies
//!
//! This layer contains:
//! - Entities: the typed Background and Spell tables
//! - Value Objects: the dataset catalogue and small shared shapes

pub mod entities;
pub mod value_objects;
