//! Output records produced by decoding an identity number.

use serde::{Deserialize, Serialize};

use crate::Gender;

/// Administrative region names resolved from the code table.
///
/// Each level is looked up independently; a code missing from the table
/// resolves to `None` without affecting the other levels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub province: Option<String>,
    pub regency: Option<String>,
    pub subdistrict: Option<String>,
}

impl Address {
    /// True when all three levels resolved to a name.
    pub fn is_complete(&self) -> bool {
        self.province.is_some() && self.regency.is_some() && self.subdistrict.is_some()
    }
}

/// Birth date recovered from the digit fields, already gender-adjusted.
///
/// The components are carried as decoded: the month is not validated
/// against 1-12, and the three fields may not form a real calendar date.
/// Derived computations that need an actual date degrade to `None` in
/// that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BornDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Elapsed age, decomposed with the epoch-anchored convention of the
/// decoder's datetime module. Not exact calendar subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Age {
    pub years: i32,
    pub months: u32,
    pub days: u32,
}

/// Distance between the evaluation time and the birthday as stored (in
/// the birth year, not rolled forward to the next occurrence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextBirthday {
    pub months: u32,
    pub days: u32,
}

/// Fully decoded identity number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedNik {
    /// The candidate string as supplied.
    pub nik: String,
    /// Region names for the 2/4/6-digit code prefixes.
    pub address: Address,
    /// `None` when the derived birth date is not a constructible calendar
    /// date.
    pub age: Option<Age>,
    pub born_date: BornDate,
    pub gender: Gender,
    /// `None` under the same condition as `age`.
    pub next_birthday: Option<NextBirthday>,
    /// The last four characters, passed through verbatim.
    pub uniq_code: String,
    /// Zodiac sign name, or `"Unknown"` when no range matches.
    pub zodiac: String,
    /// Always `true` on this type; serialized records carry the flag.
    pub valid: bool,
}

/// Outcome of validating and decoding a candidate identity number.
///
/// Decoding never raises an error: a candidate that fails the validity
/// rule comes back as `Invalid` and carries no fields.
#[derive(Debug, Clone)]
pub enum NikValidation {
    /// Structurally valid and resolvable against the region table.
    Valid(Box<ParsedNik>),
    /// Wrong length, non-digit content, or unresolved region codes.
    Invalid,
}

impl NikValidation {
    /// Returns true if the candidate passed the validity rule.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns the decoded record if the candidate was valid.
    pub fn as_record(&self) -> Option<&ParsedNik> {
        match self {
            Self::Valid(record) => Some(record),
            Self::Invalid => None,
        }
    }

    /// Consumes the outcome and returns the decoded record if valid.
    pub fn into_record(self) -> Option<ParsedNik> {
        match self {
            Self::Valid(record) => Some(*record),
            Self::Invalid => None,
        }
    }
}
