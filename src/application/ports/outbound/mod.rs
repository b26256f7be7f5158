//! Outbound ports - Interfaces that the application requires from external systems

mod seed_target_port;

pub use seed_target_port::{SeedTargetError, SeedTargetPort};

#[cfg(test)]
pub use seed_target_port::MockSeedTargetPort;
