//! # Storage Traits
//!
//! The plant store only needs string values addressed by string keys, which
//! is exactly what the browser's `localStorage` offers.

use anyhow::Result;

/// Trait defining the interface for a string key-value store
///
/// Implementations are used from a single thread; methods take `&self` so
/// that the browser storage handle and test doubles can be shared freely.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, `None` if the slot is empty
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Clear the slot under `key`; clearing an empty slot is not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}
