pub mod config;
pub mod logging;

pub mod mapping_store;
pub mod sort_name;
pub mod timestamp;
pub mod transliterate;
