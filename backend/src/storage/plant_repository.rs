//! # Plant Repository
//!
//! Owns the serialized form of the plant collection. The whole collection is
//! read and written as one document under a single key; there are no partial
//! updates at this layer.
//!
//! ## Payload Format
//!
//! ```json
//! {"dataFormatVersion":"1.0","plants":[{"id":"plant::1717171717171_9f2c4e1a","commonName":"Acerola","averageProduction":12.5,"plantingDate":"2024-01-01"}]}
//! ```
//!
//! Payloads written before versioning was introduced are a bare JSON array
//! of plants; they are still read, and rewritten in the envelope on the next
//! save.
//!
//! Writes are not coordinated with other tabs using the same key: the last
//! write wins.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::Plant;

use super::config::StoreConfig;
use super::traits::KeyValueStorage;

/// Version tag written into every payload
pub const DATA_FORMAT_VERSION: &str = "1.0";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPlants {
    plants: Vec<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredPlantsRef<'a> {
    data_format_version: &'a str,
    plants: &'a [Plant],
}

/// Plants read from a payload, plus the number of records that could not be
/// decoded and were left out
#[derive(Debug, Default, PartialEq)]
pub struct DecodedPlants {
    pub plants: Vec<Plant>,
    pub skipped: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum PlantStorageError {
    #[error("storage backend failed: {0:#}")]
    Backend(anyhow::Error),
    #[error("stored plants under '{key}' are not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("stored plants under '{key}' use unsupported format version '{version}'")]
    UnsupportedVersion { key: String, version: String },
    #[error("stored plants under '{key}' have an unexpected shape")]
    UnexpectedShape { key: String },
    #[error("failed to encode plants: {0}")]
    Encode(#[source] serde_json::Error),
}

impl PlantStorageError {
    /// True when the slot was readable but its content could not be decoded
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            PlantStorageError::Corrupt { .. }
                | PlantStorageError::UnsupportedVersion { .. }
                | PlantStorageError::UnexpectedShape { .. }
        )
    }
}

/// Key-value backed repository for the plant collection
pub struct PlantRepository<S> {
    storage: S,
    config: StoreConfig,
}

impl<S: KeyValueStorage> PlantRepository<S> {
    pub fn new(storage: S, config: StoreConfig) -> Self {
        Self { storage, config }
    }

    pub fn storage_key(&self) -> &str {
        &self.config.storage_key
    }

    /// Load the full collection; an empty or absent slot is an empty collection
    pub fn load(&self) -> Result<Vec<Plant>, PlantStorageError> {
        self.load_decoded().map(|decoded| decoded.plants)
    }

    /// Like `load`, but also reports how many stored records were unreadable
    pub fn load_decoded(&self) -> Result<DecodedPlants, PlantStorageError> {
        let raw = self
            .storage
            .get_item(self.storage_key())
            .map_err(PlantStorageError::Backend)?;

        match raw {
            Some(raw) if !raw.trim().is_empty() => {
                let decoded = decode_payload(self.storage_key(), &raw)?;
                debug!(
                    "Loaded {} plants from '{}' ({} skipped)",
                    decoded.plants.len(),
                    self.storage_key(),
                    decoded.skipped
                );
                Ok(decoded)
            }
            _ => Ok(DecodedPlants::default()),
        }
    }

    /// Replace the full collection
    pub fn store(&self, plants: &[Plant]) -> Result<(), PlantStorageError> {
        let payload = encode_payload(plants)?;
        self.storage
            .set_item(self.storage_key(), &payload)
            .map_err(PlantStorageError::Backend)?;
        debug!("Stored {} plants under '{}'", plants.len(), self.storage_key());
        Ok(())
    }

    /// Copy the current raw payload to a backup slot.
    ///
    /// An existing backup is never overwritten: when the plain backup key is
    /// taken, the copy goes to a key stamped with `now_millis`. Returns the
    /// backup key, or `None` when the slot was empty.
    pub fn backup_raw_payload(&self, now_millis: i64) -> Result<Option<String>, PlantStorageError> {
        let raw = self
            .storage
            .get_item(self.storage_key())
            .map_err(PlantStorageError::Backend)?;
        let Some(raw) = raw else {
            return Ok(None);
        };

        let mut backup_key = self.config.corrupt_backup_key();
        let taken = self
            .storage
            .get_item(&backup_key)
            .map_err(PlantStorageError::Backend)?
            .is_some();
        if taken {
            backup_key = self.config.stamped_backup_key(now_millis);
        }

        self.storage
            .set_item(&backup_key, &raw)
            .map_err(PlantStorageError::Backend)?;
        warn!(
            "Copied undecodable payload from '{}' to '{}'",
            self.storage_key(),
            backup_key
        );
        Ok(Some(backup_key))
    }
}

/// Serialize plants into the versioned envelope
pub fn encode_payload(plants: &[Plant]) -> Result<String, PlantStorageError> {
    let envelope = StoredPlantsRef {
        data_format_version: DATA_FORMAT_VERSION,
        plants,
    };
    serde_json::to_string(&envelope).map_err(PlantStorageError::Encode)
}

/// Decode either the versioned envelope or a legacy bare array.
///
/// A payload that is not JSON, or whose outer shape is wrong, fails as a
/// whole. Inside a well-formed list each record is decoded on its own; an
/// unreadable record is logged and skipped so the rest stay visible.
pub fn decode_payload(key: &str, raw: &str) -> Result<DecodedPlants, PlantStorageError> {
    let corrupt = |source| PlantStorageError::Corrupt {
        key: key.to_string(),
        source,
    };

    let value: Value = serde_json::from_str(raw).map_err(corrupt)?;
    let version = match &value {
        Value::Array(_) => None,
        Value::Object(fields) => {
            let version = fields
                .get("dataFormatVersion")
                .and_then(Value::as_str)
                .ok_or_else(|| PlantStorageError::UnexpectedShape {
                    key: key.to_string(),
                })?;
            Some(version.to_string())
        }
        _ => {
            return Err(PlantStorageError::UnexpectedShape {
                key: key.to_string(),
            })
        }
    };

    let records: Vec<Value> = match version {
        None => {
            debug!("Reading legacy unversioned payload from '{}'", key);
            serde_json::from_value(value).map_err(corrupt)?
        }
        Some(version) if version == DATA_FORMAT_VERSION => {
            let stored: StoredPlants = serde_json::from_value(value).map_err(corrupt)?;
            stored.plants
        }
        Some(version) => {
            return Err(PlantStorageError::UnsupportedVersion {
                key: key.to_string(),
                version,
            })
        }
    };

    Ok(decode_records(key, records))
}

fn decode_records(key: &str, records: Vec<Value>) -> DecodedPlants {
    let mut decoded = DecodedPlants::default();
    for record in records {
        let id = record
            .get("id")
            .map(Value::to_string)
            .unwrap_or_else(|| "<no id>".to_string());
        match serde_json::from_value::<Plant>(record) {
            Ok(plant) => decoded.plants.push(plant),
            Err(e) => {
                warn!("Skipping unreadable plant record {} in '{}': {}", id, key, e);
                decoded.skipped += 1;
            }
        }
    }
    decoded
}
