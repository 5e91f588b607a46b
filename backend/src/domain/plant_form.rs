use shared::{PlantDraft, PlantFormFields};

use super::plant_dates::parse_planting_date;

/// Reasons the plant form cannot be saved
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlantValidationError {
    #[error("Por favor, preencha todos os campos obrigatórios.")]
    MissingRequiredFields { missing: Vec<&'static str> },
    #[error("Produção média inválida: '{0}'")]
    InvalidAverageProduction(String),
    #[error("Data de plantio inválida: '{0}'")]
    InvalidPlantingDate(String),
}

/// Turn raw form input into a draft without id or photo.
///
/// The caller decides the id (edit mode) and the photo (file input).
pub fn validate_form(fields: &PlantFormFields) -> Result<PlantDraft, PlantValidationError> {
    let common_name = fields.common_name.trim();
    let average_production = fields.average_production.trim();
    let planting_date = fields.planting_date.trim();

    let missing: Vec<&'static str> = [
        ("commonName", common_name),
        ("averageProduction", average_production),
        ("plantingDate", planting_date),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(name, _)| name)
    .collect();

    if !missing.is_empty() {
        return Err(PlantValidationError::MissingRequiredFields { missing });
    }

    let average_production_value = parse_average_production(average_production)?;

    if parse_planting_date(planting_date).is_err() {
        return Err(PlantValidationError::InvalidPlantingDate(planting_date.to_string()));
    }

    let scientific_name = Some(fields.scientific_name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string);

    Ok(PlantDraft {
        id: None,
        common_name: common_name.to_string(),
        scientific_name,
        average_production: average_production_value,
        planting_date: planting_date.to_string(),
        image: None,
    })
}

/// Kilograms per harvest; a decimal comma is accepted ("12,5")
fn parse_average_production(raw: &str) -> Result<f64, PlantValidationError> {
    let normalized = raw.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(PlantValidationError::InvalidAverageProduction(raw.to_string())),
    }
}
