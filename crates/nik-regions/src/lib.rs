#![deny(unsafe_code)]

pub mod csv;
pub mod error;
pub mod json;

pub use crate::csv::load_region_table_csv;
pub use crate::error::RegionsError;
pub use crate::json::load_region_table_json;
