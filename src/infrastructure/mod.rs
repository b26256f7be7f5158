//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Config: connection and data settings for a seed run
//! - Persistence: MongoDB adapter for the seed target port

pub mod config;
pub mod persistence;
