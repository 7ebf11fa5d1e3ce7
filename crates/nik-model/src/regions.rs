//! The administrative region code table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Static mapping from administrative code prefixes to region names, at
/// province (2-digit), regency (4-digit), and subdistrict (6-digit)
/// granularity.
///
/// The code space is hierarchical (a regency code begins with its
/// province code), but the table does not enforce that invariant: each
/// level is looked up independently and missing entries are tolerated.
///
/// The table is read-only after construction and may be shared freely
/// across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionTable {
    pub provinces: BTreeMap<String, String>,
    pub regencies: BTreeMap<String, String>,
    pub subdistricts: BTreeMap<String, String>,
}

impl RegionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a 2-digit province code.
    pub fn province(&self, code: &str) -> Option<&str> {
        self.provinces.get(code).map(String::as_str)
    }

    /// Resolves a 4-digit regency code.
    pub fn regency(&self, code: &str) -> Option<&str> {
        self.regencies.get(code).map(String::as_str)
    }

    /// Resolves a 6-digit subdistrict code.
    pub fn subdistrict(&self, code: &str) -> Option<&str> {
        self.subdistricts.get(code).map(String::as_str)
    }

    pub fn with_province(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.provinces.insert(code.into(), name.into());
        self
    }

    pub fn with_regency(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.regencies.insert(code.into(), name.into());
        self
    }

    pub fn with_subdistrict(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.subdistricts.insert(code.into(), name.into());
        self
    }

    /// Total number of entries across all three levels.
    pub fn entry_count(&self) -> usize {
        self.provinces.len() + self.regencies.len() + self.subdistricts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}
