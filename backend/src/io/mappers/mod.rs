pub mod plant_mapper;
