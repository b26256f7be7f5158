//! Application layer - Seeding use cases and the ports they depend on

pub mod ports;
pub mod services;
