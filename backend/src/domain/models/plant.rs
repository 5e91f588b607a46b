use shared::PlantId;
use uuid::Uuid;

use crate::storage::PlantStorageError;

/// Build a fresh id from the creation time plus a random suffix, so two
/// plants created within the same millisecond still get distinct ids.
pub fn generate_plant_id(now_millis: i64) -> PlantId {
    let suffix = Uuid::new_v4().simple().to_string();
    PlantId::new(format!("plant::{}_{}", now_millis, &suffix[..8]))
}

#[derive(Debug, thiserror::Error)]
pub enum PlantServiceError {
    #[error("Planta não encontrada: {0}")]
    NotFound(PlantId),
    #[error(transparent)]
    Storage(#[from] PlantStorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_embed_timestamp() {
        let id = generate_plant_id(1_704_067_200_000);
        assert!(id.as_str().starts_with("plant::1704067200000_"));
        assert_eq!(id.as_str().len(), "plant::1704067200000_".len() + 8);
    }

    #[test]
    fn test_same_millisecond_ids_differ() {
        let first = generate_plant_id(1);
        let second = generate_plant_id(1);
        assert_ne!(first, second);
    }
}
