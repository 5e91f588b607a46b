//! # Fruteiras Backend
//!
//! Contains all non-UI logic for the fruit plant inventory.
//!
//! The crate is UI-agnostic: the browser frontend plugs its own storage,
//! widgets and file reader into the traits defined here, and the test suite
//! plugs in memory-backed doubles.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! IO Layer (PlantBinder, surface traits, mappers)
//!     ↓
//! Domain Layer (PlantService, validation, planting dates)
//!     ↓
//! Storage Layer (PlantRepository over a key-value slot)
//! ```

pub mod storage;
pub mod domain;
pub mod io;

#[cfg(test)]
pub(crate) mod test_utils;

pub use storage::*;
pub use domain::*;
pub use io::*;

use log::info;

/// Build the plant store for the given storage backend and configuration.
///
/// Called once at startup; the returned service is handed to the binder.
pub fn initialize_store<S: KeyValueStorage>(storage: S, config: StoreConfig) -> PlantService<S> {
    info!("Setting up plant store under key '{}'", config.storage_key);
    let repository = PlantRepository::new(storage, config);
    PlantService::new(repository)
}
