//! Decoder and validator for Indonesian national identity numbers (NIK).
//!
//! A NIK is a fixed-format 16-digit identifier encoding the holder's
//! administrative region, birth date, gender, and a registration
//! sequence code. [`parse`] validates a candidate against a supplied
//! [`RegionTable`] and, when valid, decodes every derived field into a
//! [`nik_model::ParsedNik`].
//!
//! Decoding never raises an error: malformed input degrades to
//! [`NikValidation::Invalid`], unknown region codes degrade to `None`
//! address fields, and an unmatched zodiac range degrades to
//! `"Unknown"`.
//!
//! Every time-dependent derivation (century pivot, age, next birthday,
//! zodiac scratch year) reads an injectable clock: [`parse_at`] pins it
//! for tests and reproducible runs, [`parse`] uses the current UTC time.

mod datetime;
pub mod segments;
pub mod zodiac;

use chrono::{Datelike, NaiveDateTime, Utc};

use nik_model::{Address, BornDate, Gender, NikValidation, ParsedNik, RegionTable};

use crate::segments::NikSegments;

pub use crate::segments::NIK_LEN;
pub use crate::zodiac::{ZodiacSign, zodiac_name, zodiac_sign};

/// Decodes and validates `candidate` against `regions` using the current
/// UTC wall clock.
pub fn parse(candidate: &str, regions: &RegionTable) -> NikValidation {
    parse_at(candidate, regions, Utc::now().naive_utc())
}

/// Clock-injected variant of [`parse`].
///
/// The candidate is valid iff it is exactly 16 ASCII digits and its
/// province, regency, and subdistrict codes all resolve in `regions`.
/// Anything else comes back as [`NikValidation::Invalid`] with no fields.
pub fn parse_at(candidate: &str, regions: &RegionTable, now: NaiveDateTime) -> NikValidation {
    let Some(segments) = NikSegments::split(candidate) else {
        tracing::debug!(
            len = candidate.len(),
            "rejected candidate: not 16 ASCII digits"
        );
        return NikValidation::Invalid;
    };

    let address = resolve_address(&segments, regions);
    if !address.is_complete() {
        tracing::debug!(
            province = segments.province_code(),
            regency = segments.regency_code(),
            subdistrict = segments.subdistrict_code(),
            "rejected candidate: unresolved region codes"
        );
        return NikValidation::Invalid;
    }

    let gender = Gender::from_day_field(segments.day_field());
    let born_date = derive_born_date(&segments, gender, now);

    NikValidation::Valid(Box::new(ParsedNik {
        nik: candidate.to_string(),
        address,
        age: datetime::age_between(&born_date, now),
        born_date,
        gender,
        next_birthday: datetime::birthday_distance(&born_date, now),
        uniq_code: segments.uniq_code().to_string(),
        zodiac: zodiac::zodiac_name(born_date.month, born_date.day, now.year()).to_string(),
        valid: true,
    }))
}

/// Applies the validity rule without decoding the derived fields.
pub fn is_valid(candidate: &str, regions: &RegionTable) -> bool {
    match NikSegments::split(candidate) {
        Some(segments) => resolve_address(&segments, regions).is_complete(),
        None => false,
    }
}

/// Looks up the three code prefixes independently; each level degrades
/// to `None` on a miss.
fn resolve_address(segments: &NikSegments<'_>, regions: &RegionTable) -> Address {
    Address {
        province: regions.province(segments.province_code()).map(String::from),
        regency: regions.regency(segments.regency_code()).map(String::from),
        subdistrict: regions
            .subdistrict(segments.subdistrict_code())
            .map(String::from),
    }
}

/// Recovers the birth date: the female +40 day offset is undone, the
/// month is carried verbatim, and the two-digit year is widened with the
/// century pivot. A `yy` below the current year's last two digits reads
/// as 20xx, anything else as 19xx.
fn derive_born_date(segments: &NikSegments<'_>, gender: Gender, now: NaiveDateTime) -> BornDate {
    let yy = segments.year_field();
    let current_two_digit = now.year() % 100;
    let year = if yy < current_two_digit {
        2000 + yy
    } else {
        1900 + yy
    };

    BornDate {
        year,
        month: segments.month_field(),
        day: segments.day_field() - gender.day_offset(),
    }
}
