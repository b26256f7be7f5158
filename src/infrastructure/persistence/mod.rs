//! MongoDB persistence adapters

mod mongo_seed_target;

pub use mongo_seed_target::MongoSeedTarget;
