//! # IO Module
//!
//! Connects the domain to whatever draws the inventory on screen.
//!
//! The browser frontend implements the surface traits with yew state and DOM
//! nodes; `PlantBinder` drives them. The binder owns no persisted state.

pub mod binder;
pub mod mappers;
pub mod surfaces;

pub use binder::{PlantBinder, SaveError};
pub use mappers::plant_mapper::{PlantMapper, SCIENTIFIC_NAME_PLACEHOLDER};
pub use surfaces::{PhotoDecodeError, PhotoDecoder, PlantFormSurface, PlantListSurface};
