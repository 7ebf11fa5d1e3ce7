//! Type-safe enumerations for identity-number metadata.
//!
//! The identity number has no dedicated gender field: gender is encoded in
//! the day-of-birth digits, which are stored offset by +40 for female
//! holders. The canonical display strings are the civil-registry values
//! `LAKI-LAKI` and `PEREMPUAN`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender of the identity-number holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male: the day-of-birth field is stored unmodified (1-31).
    #[serde(rename = "LAKI-LAKI")]
    Male,

    /// Female: the day-of-birth field is stored offset by +40 (41-71).
    #[serde(rename = "PEREMPUAN")]
    Female,
}

impl Gender {
    /// Returns the canonical civil-registry string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "LAKI-LAKI",
            Gender::Female => "PEREMPUAN",
        }
    }

    /// Offset applied to the day-of-birth field for this gender.
    pub fn day_offset(&self) -> u32 {
        match self {
            Gender::Male => 0,
            Gender::Female => 40,
        }
    }

    /// Derives gender from the raw day-of-birth field value.
    /// Values above 40 mark a female record.
    pub fn from_day_field(raw_day: u32) -> Self {
        if raw_day > 40 {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    /// Parse a gender string. Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "LAKI-LAKI" => Ok(Gender::Male),
            "PEREMPUAN" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {s}")),
        }
    }
}
