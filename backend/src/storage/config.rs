/// Storage key used by the original browser tool; kept so existing data loads.
pub const DEFAULT_STORAGE_KEY: &str = "brejo-paraibano-fruteiras";

/// Suffix appended to the storage key when an undecodable payload is set aside
pub const DEFAULT_CORRUPT_BACKUP_SUFFIX: &str = ".corrupt";

/// Where the plant collection is persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key of the single slot holding the whole collection
    pub storage_key: String,
    /// Suffix for the slot that receives a payload that failed to decode
    pub corrupt_backup_suffix: String,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            corrupt_backup_suffix: DEFAULT_CORRUPT_BACKUP_SUFFIX.to_string(),
        }
    }

    /// Use a different slot, e.g. to isolate tests or separate inventories
    pub fn with_storage_key(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            ..Self::new()
        }
    }

    pub fn corrupt_backup_key(&self) -> String {
        format!("{}{}", self.storage_key, self.corrupt_backup_suffix)
    }

    /// Backup key used once the plain backup slot is already taken
    pub fn stamped_backup_key(&self, now_millis: i64) -> String {
        format!("{}.{}", self.corrupt_backup_key(), now_millis)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
