//! Planting date helpers.
//!
//! Age is deliberately approximate: elapsed time divided by fixed 30-day
//! months, floored. Dates in the future count the same as dates equally far
//! in the past.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;
const DAYS_PER_MONTH: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlantDateError {
    #[error("Data de plantio inválida: '{0}'")]
    Invalid(String),
}

/// Parse a planting date.
///
/// `YYYY-MM-DD` (what a date input produces) is taken as midnight UTC; full
/// RFC 3339 timestamps are accepted as well.
pub fn parse_planting_date(planting_date: &str) -> Result<DateTime<Utc>, PlantDateError> {
    let trimmed = planting_date.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| PlantDateError::Invalid(planting_date.to_string()))
}

/// Age in 30-day months between `planting_date` and `now`
pub fn age_in_months_at(planting_date: &str, now: DateTime<Utc>) -> Result<u32, PlantDateError> {
    let planted = parse_planting_date(planting_date)?;
    let elapsed_millis = (now - planted).num_milliseconds().abs();
    let months = elapsed_millis / (MILLIS_PER_DAY * DAYS_PER_MONTH);
    Ok(u32::try_from(months).unwrap_or(u32::MAX))
}

/// Render a stored date as dd/mm/yyyy; unparseable input is returned as is
pub fn format_date(date: &str) -> String {
    let trimmed = date.trim();

    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return day.format("%d/%m/%Y").to_string();
    }

    match DateTime::parse_from_rfc3339(trimmed) {
        Ok(timestamp) => timestamp.date_naive().format("%d/%m/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}
