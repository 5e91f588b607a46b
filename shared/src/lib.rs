use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a stored plant.
///
/// New ids look like `plant::<epoch_millis>_<suffix>`. Older payloads stored
/// the creation timestamp as a bare JSON number, so deserialization accepts
/// either form; serialization always writes a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlantId(String);

impl PlantId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlantId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PlantId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for PlantId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Integer(u64),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Ok(PlantId(text)),
            RawId::Integer(number) => Ok(PlantId(number.to_string())),
        }
    }
}

/// A fruit-bearing plant as persisted in the browser slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: PlantId,
    /// Common (popular) name, always present
    pub common_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    /// Average yield in kilograms per harvest
    #[serde(default, deserialize_with = "production_or_zero")]
    pub average_production: f64,
    /// Planting date as entered in the form (YYYY-MM-DD)
    pub planting_date: String,
    /// Photo encoded as a data URL (base64 payload)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Older payloads wrote an unparseable production as `null`
fn production_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl Plant {
    /// Scientific name, treating a blank value the same as a missing one
    pub fn scientific_name(&self) -> Option<&str> {
        self.scientific_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// A plant that may not have been persisted yet.
///
/// `id: None` means "create"; `Some` means "replace the record with this id".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantDraft {
    #[serde(default)]
    pub id: Option<PlantId>,
    pub common_name: String,
    #[serde(default)]
    pub scientific_name: Option<String>,
    pub average_production: f64,
    pub planting_date: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl PlantDraft {
    /// Attach the id chosen by the store, producing the persisted form
    pub fn into_plant(self, id: PlantId) -> Plant {
        Plant {
            id,
            common_name: self.common_name,
            scientific_name: self.scientific_name,
            average_production: self.average_production,
            planting_date: self.planting_date,
            image: self.image,
        }
    }
}

impl From<Plant> for PlantDraft {
    fn from(plant: Plant) -> Self {
        Self {
            id: Some(plant.id),
            common_name: plant.common_name,
            scientific_name: plant.scientific_name,
            average_production: plant.average_production,
            planting_date: plant.planting_date,
            image: plant.image,
        }
    }
}

/// Raw text values currently held by the plant form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantFormFields {
    pub common_name: String,
    pub scientific_name: String,
    pub average_production: String,
    pub planting_date: String,
}

impl PlantFormFields {
    /// Populate the form from a stored plant (used when opening for edit)
    pub fn from_plant(plant: &Plant) -> Self {
        Self {
            common_name: plant.common_name.clone(),
            scientific_name: plant.scientific_name().unwrap_or_default().to_string(),
            average_production: plant.average_production.to_string(),
            planting_date: plant.planting_date.clone(),
        }
    }
}

/// Whether the editing surface creates a new plant or edits an existing one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorMode {
    #[default]
    Create,
    Edit(PlantId),
}

impl EditorMode {
    pub fn editing_id(&self) -> Option<&PlantId> {
        match self {
            EditorMode::Create => None,
            EditorMode::Edit(id) => Some(id),
        }
    }
}

/// Display-ready summary of one plant for the grid view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantCard {
    pub id: PlantId,
    pub common_name: String,
    /// Scientific name or the "not informed" placeholder
    pub scientific_name: String,
    pub age_in_months: u32,
    /// e.g. "14 meses"
    pub age_badge: String,
    /// e.g. "12.5 Kg/safra"
    pub average_production: String,
    /// dd/mm/yyyy
    pub planting_date: String,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plant_id_accepts_legacy_numeric_ids() {
        let id: PlantId = serde_json::from_str("1717171717171").unwrap();
        assert_eq!(id.as_str(), "1717171717171");

        let id: PlantId = serde_json::from_str("\"plant::1_abc\"").unwrap();
        assert_eq!(id.as_str(), "plant::1_abc");

        assert_eq!(serde_json::to_string(&PlantId::new("42")).unwrap(), "\"42\"");
    }

    #[test]
    fn test_null_production_reads_as_zero() {
        let plant: Plant = serde_json::from_str(
            r#"{"id":2,"commonName":"Caju","averageProduction":null,"plantingDate":"2023-05-10"}"#,
        )
        .unwrap();
        assert_eq!(plant.average_production, 0.0);

        let plant: Plant =
            serde_json::from_str(r#"{"id":"plant::3","commonName":"Manga","plantingDate":"2023-05-10"}"#).unwrap();
        assert_eq!(plant.average_production, 0.0);
    }

    #[test]
    fn test_plant_uses_camel_case_fields() {
        let plant = Plant {
            id: PlantId::new("plant::1"),
            common_name: "Acerola".to_string(),
            scientific_name: None,
            average_production: 12.5,
            planting_date: "2024-01-01".to_string(),
            image: None,
        };

        let json = serde_json::to_value(&plant).unwrap();
        assert_eq!(json["commonName"], "Acerola");
        assert_eq!(json["averageProduction"], 12.5);
        assert_eq!(json["plantingDate"], "2024-01-01");
        assert!(json.get("scientificName").is_none());
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_blank_scientific_name_is_absent() {
        let json = r#"{"id":1,"commonName":"Caju","scientificName":"  ","averageProduction":3,"plantingDate":"2023-05-10"}"#;
        let plant: Plant = serde_json::from_str(json).unwrap();
        assert_eq!(plant.scientific_name(), None);
        assert_eq!(plant.average_production, 3.0);
    }

    #[test]
    fn test_form_fields_from_plant() {
        let plant = Plant {
            id: PlantId::new("plant::7"),
            common_name: "Pitanga".to_string(),
            scientific_name: Some("Eugenia uniflora".to_string()),
            average_production: 4.25,
            planting_date: "2022-11-30".to_string(),
            image: Some("data:image/png;base64,AAAA".to_string()),
        };

        let fields = PlantFormFields::from_plant(&plant);
        assert_eq!(fields.common_name, "Pitanga");
        assert_eq!(fields.scientific_name, "Eugenia uniflora");
        assert_eq!(fields.average_production, "4.25");
        assert_eq!(fields.planting_date, "2022-11-30");
    }

    #[test]
    fn test_editor_mode_defaults_to_create() {
        assert_eq!(EditorMode::default(), EditorMode::Create);
        assert_eq!(EditorMode::default().editing_id(), None);
        let mode = EditorMode::Edit(PlantId::new("x"));
        assert_eq!(mode.editing_id(), Some(&PlantId::new("x")));
    }
}
