//! # Storage Module
//!
//! Persistence of the plant collection in a single key-value slot.
//!
//! - **traits**: the `KeyValueStorage` abstraction (browser `localStorage`
//!   in production, `MemoryStorage` in tests)
//! - **config**: which slot the collection lives in
//! - **plant_repository**: encoding of the whole collection as one versioned
//!   JSON document, read and rewritten as a unit

pub mod config;
pub mod memory;
pub mod plant_repository;
pub mod traits;

pub use config::StoreConfig;
pub use memory::MemoryStorage;
pub use plant_repository::{DecodedPlants, PlantRepository, PlantStorageError, DATA_FORMAT_VERSION};
pub use traits::KeyValueStorage;
