pub mod plant_surfaces;
pub mod use_plants;
