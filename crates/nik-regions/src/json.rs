#![deny(unsafe_code)]

use std::path::Path;

use nik_model::RegionTable;

use crate::error::RegionsError;

/// Loads a region table from the JSON shape shipped with civil-registry
/// datasets: three top-level maps keyed by 2/4/6-digit codes.
///
/// ```json
/// {
///   "provinces": { "31": "DKI JAKARTA" },
///   "regencies": { "3171": "JAKARTA SELATAN" },
///   "subdistricts": { "317101": "SETIABUDI" }
/// }
/// ```
pub fn load_region_table_json(path: &Path) -> Result<RegionTable, RegionsError> {
    let bytes = std::fs::read(path).map_err(|e| RegionsError::io(path, e))?;

    let table: RegionTable =
        serde_json::from_slice(&bytes).map_err(|e| RegionsError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(
        provinces = table.provinces.len(),
        regencies = table.regencies.len(),
        subdistricts = table.subdistricts.len(),
        "loaded region table from JSON"
    );

    Ok(table)
}
