#![deny(unsafe_code)]

use std::path::Path;

use nik_model::RegionTable;

use crate::error::RegionsError;

/// Parses the two-column `code,name` listing used by Indonesian
/// administrative-code publications.
///
/// Codes may be written plain (`3171`) or with dotted level separators
/// (`31.71`); separators are stripped before classification. The digit
/// length then selects the level: 2 for provinces, 4 for regencies, 6 for
/// subdistricts. Rows with any other code shape are skipped with a
/// warning rather than failing the load.
pub fn load_region_table_csv(path: &Path) -> Result<RegionTable, RegionsError> {
    let bytes = std::fs::read(path).map_err(|e| RegionsError::io(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let mut table = RegionTable::new();
    for row in reader.records() {
        let row = row.map_err(|e| RegionsError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let Some(raw_code) = get_string(&row, 0) else {
            continue;
        };
        let Some(name) = get_string(&row, 1) else {
            continue;
        };

        let code = raw_code.replace('.', "");
        if !code.chars().all(|c| c.is_ascii_digit()) {
            tracing::warn!(code = %raw_code, "skipping non-numeric region code");
            continue;
        }

        match code.len() {
            2 => {
                table.provinces.insert(code, name);
            }
            4 => {
                table.regencies.insert(code, name);
            }
            6 => {
                table.subdistricts.insert(code, name);
            }
            _ => {
                tracing::warn!(code = %raw_code, "skipping region code with unexpected length");
            }
        }
    }

    tracing::debug!(
        provinces = table.provinces.len(),
        regencies = table.regencies.len(),
        subdistricts = table.subdistricts.len(),
        "loaded region table from CSV"
    );

    Ok(table)
}

fn get_string(row: &csv::StringRecord, idx: usize) -> Option<String> {
    row.get(idx)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
