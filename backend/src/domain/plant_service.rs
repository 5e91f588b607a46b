use chrono::{DateTime, Utc};
use log::{error, info, warn};

use crate::storage::{KeyValueStorage, PlantRepository, PlantStorageError};
use shared::{Plant, PlantDraft, PlantId};

use super::models::plant::{generate_plant_id, PlantServiceError};
use super::plant_dates::{self, PlantDateError};

/// Source of "now" for age calculations and id timestamps
pub type Clock = fn() -> DateTime<Utc>;

/// Record store for plants.
///
/// Every mutation reads the whole collection, changes it in memory and
/// rewrites it; there is no caching between calls.
pub struct PlantService<S> {
    repository: PlantRepository<S>,
    clock: Clock,
}

impl<S: KeyValueStorage> PlantService<S> {
    /// Create a new PlantService using the wall clock
    pub fn new(repository: PlantRepository<S>) -> Self {
        Self {
            repository,
            clock: Utc::now,
        }
    }

    /// Replace the clock, e.g. to pin "today" in tests
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// All plants in insertion order.
    ///
    /// A payload that cannot be decoded (or a storage failure) is logged and
    /// treated as an empty collection so the list can always render.
    pub fn get_all(&self) -> Vec<Plant> {
        match self.repository.load() {
            Ok(plants) => plants,
            Err(e) if e.is_decode_failure() => {
                warn!("Ignoring unreadable plant data: {}", e);
                Vec::new()
            }
            Err(e) => {
                error!("Failed to read plants: {}", e);
                Vec::new()
            }
        }
    }

    /// All plants, surfacing decode and storage failures to the caller
    pub fn load_all(&self) -> Result<Vec<Plant>, PlantStorageError> {
        self.repository.load()
    }

    /// Find a plant by id; an unreadable slot is an error, not a miss
    pub fn find(&self, id: &PlantId) -> Result<Option<Plant>, PlantServiceError> {
        Ok(self.load_all()?.into_iter().find(|plant| &plant.id == id))
    }

    /// Create or update a plant.
    ///
    /// Without an id the plant gets a fresh one and is appended. With an id
    /// the matching record is replaced at its position; an id that is not in
    /// the collection is an error and nothing is written. An existing id is
    /// never reassigned.
    pub fn save(&self, draft: PlantDraft) -> Result<Plant, PlantServiceError> {
        let mut plants = self.load_for_update()?;

        let requested_id = draft.id.clone().filter(|id| !id.is_empty());
        let plant = match requested_id {
            Some(id) => {
                let index = plants
                    .iter()
                    .position(|plant| plant.id == id)
                    .ok_or_else(|| PlantServiceError::NotFound(id.clone()))?;
                let plant = draft.into_plant(id);
                plants[index] = plant.clone();
                info!("Updated plant: {} with ID: {}", plant.common_name, plant.id);
                plant
            }
            None => {
                let id = self.next_id(&plants);
                let plant = draft.into_plant(id);
                plants.push(plant.clone());
                info!("Created plant: {} with ID: {}", plant.common_name, plant.id);
                plant
            }
        };

        self.repository.store(&plants)?;
        Ok(plant)
    }

    /// Delete a plant by id; returns whether a record was removed.
    ///
    /// A missing id is not an error. The remaining collection is rewritten
    /// either way.
    pub fn delete(&self, id: &PlantId) -> Result<bool, PlantServiceError> {
        let plants = self.load_for_update()?;
        let before = plants.len();
        let remaining: Vec<Plant> = plants.into_iter().filter(|plant| &plant.id != id).collect();
        let removed = remaining.len() != before;

        self.repository.store(&remaining)?;

        if removed {
            info!("Deleted plant with ID: {}", id);
        } else {
            warn!("Plant not found for deletion: {}", id);
        }
        Ok(removed)
    }

    /// Age of a plant in 30-day months, counted from the planting date to now
    pub fn calculate_age_in_months(&self, planting_date: &str) -> Result<u32, PlantDateError> {
        plant_dates::age_in_months_at(planting_date, self.now())
    }

    /// Planting date as dd/mm/yyyy
    pub fn format_date(&self, date: &str) -> String {
        plant_dates::format_date(date)
    }

    /// Load for a read-modify-write cycle.
    ///
    /// Whenever the rewrite would lose stored data (an undecodable payload,
    /// or records that were skipped) the raw payload is copied to a backup
    /// slot first.
    fn load_for_update(&self) -> Result<Vec<Plant>, PlantServiceError> {
        match self.repository.load_decoded() {
            Ok(decoded) if decoded.skipped > 0 => {
                warn!(
                    "{} stored plant records are unreadable and will not be rewritten",
                    decoded.skipped
                );
                self.repository.backup_raw_payload(self.now().timestamp_millis())?;
                Ok(decoded.plants)
            }
            Ok(decoded) => Ok(decoded.plants),
            Err(e) if e.is_decode_failure() => {
                warn!("Stored plants are unreadable, starting from an empty list: {}", e);
                self.repository.backup_raw_payload(self.now().timestamp_millis())?;
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn next_id(&self, plants: &[Plant]) -> PlantId {
        loop {
            let candidate = generate_plant_id(self.now().timestamp_millis());
            if !plants.iter().any(|plant| plant.id == candidate) {
                return candidate;
            }
            warn!("Generated plant id {} already exists, retrying", candidate);
        }
    }
}
