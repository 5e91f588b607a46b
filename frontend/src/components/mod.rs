pub mod header;
pub mod plant_card;
pub mod plant_form_modal;
pub mod plant_grid;
