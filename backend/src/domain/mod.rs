//! # Domain Module
//!
//! Business rules of the plant inventory, independent of the browser.
//!
//! - **plant_service**: the record store (list, upsert, delete) over a
//!   `PlantRepository`
//! - **plant_dates**: planting date parsing, age-in-months and display format
//! - **plant_form**: validation of raw form input into a `PlantDraft`
//! - **models**: id generation and domain error types

pub mod models;
pub mod plant_dates;
pub mod plant_form;
pub mod plant_service;

pub use models::plant::{generate_plant_id, PlantServiceError};
pub use plant_dates::{age_in_months_at, format_date, parse_planting_date, PlantDateError};
pub use plant_form::{validate_form, PlantValidationError};
pub use plant_service::{Clock, PlantService};
