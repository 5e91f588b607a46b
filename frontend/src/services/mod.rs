pub mod browser_storage;
pub mod logging;
pub mod photo;
