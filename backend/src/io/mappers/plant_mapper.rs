use chrono::{DateTime, Utc};
use log::warn;
use shared::{Plant, PlantCard};

use crate::domain::plant_dates::{age_in_months_at, format_date};

/// Shown on a card when the plant has no scientific name
pub const SCIENTIFIC_NAME_PLACEHOLDER: &str = "Nome científico não informado";

/// Mapper from stored plants to display cards.
pub struct PlantMapper;

impl PlantMapper {
    /// Derive the card for one plant as of `now`.
    ///
    /// A planting date that no longer parses shows age 0 instead of hiding
    /// the plant.
    pub fn to_card(plant: &Plant, now: DateTime<Utc>) -> PlantCard {
        let age_in_months = age_in_months_at(&plant.planting_date, now).unwrap_or_else(|e| {
            warn!("Cannot compute age of plant {}: {}", plant.id, e);
            0
        });

        PlantCard {
            id: plant.id.clone(),
            common_name: plant.common_name.clone(),
            scientific_name: plant
                .scientific_name()
                .unwrap_or(SCIENTIFIC_NAME_PLACEHOLDER)
                .to_string(),
            age_in_months,
            age_badge: format!("{} meses", age_in_months),
            average_production: format!("{} Kg/safra", plant.average_production),
            planting_date: format_date(&plant.planting_date),
            image: plant.image.clone().filter(|image| !image.is_empty()),
        }
    }

    pub fn to_cards(plants: &[Plant], now: DateTime<Utc>) -> Vec<PlantCard> {
        plants.iter().map(|plant| Self::to_card(plant, now)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::PlantId;

    fn plant() -> Plant {
        Plant {
            id: PlantId::new("plant::1"),
            common_name: "Acerola".to_string(),
            scientific_name: None,
            average_production: 12.5,
            planting_date: "2024-01-01".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_card_fields() {
        let now = Utc.with_ymd_and_hms(2024, 3, 6, 0, 0, 0).unwrap();
        let card = PlantMapper::to_card(&plant(), now);

        assert_eq!(card.id, PlantId::new("plant::1"));
        assert_eq!(card.common_name, "Acerola");
        assert_eq!(card.scientific_name, SCIENTIFIC_NAME_PLACEHOLDER);
        assert_eq!(card.age_in_months, 2);
        assert_eq!(card.age_badge, "2 meses");
        assert_eq!(card.average_production, "12.5 Kg/safra");
        assert_eq!(card.planting_date, "01/01/2024");
        assert_eq!(card.image, None);
    }

    #[test]
    fn test_card_with_scientific_name_and_photo() {
        let mut plant = plant();
        plant.scientific_name = Some("Malpighia emarginata".to_string());
        plant.average_production = 8.0;
        plant.image = Some("data:image/jpeg;base64,/9j/".to_string());

        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let card = PlantMapper::to_card(&plant, now);
        assert_eq!(card.scientific_name, "Malpighia emarginata");
        assert_eq!(card.average_production, "8 Kg/safra");
        assert_eq!(card.age_badge, "0 meses");
        assert_eq!(card.image.as_deref(), Some("data:image/jpeg;base64,/9j/"));
    }

    #[test]
    fn test_unparseable_planting_date() {
        let mut plant = plant();
        plant.planting_date = "??".to_string();
        let card = PlantMapper::to_card(&plant, Utc::now());
        assert_eq!(card.age_in_months, 0);
        assert_eq!(card.planting_date, "??");
    }
}
