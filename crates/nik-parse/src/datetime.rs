//! Epoch-anchored interval decomposition.
//!
//! Age and birthday distance share one convention: the signed interval is
//! added to the Unix epoch and the resulting calendar date is read back
//! as a component breakdown (`year - 1970` whole years, `month0` months
//! within the year, `day - 1` days within the month). This is not
//! calendar-correct subtraction and can be off by one unit near month
//! boundaries; callers depend on the convention being stable, not exact.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use nik_model::{Age, BornDate, NextBirthday};

/// Midnight at the start of the derived birth date, if the components
/// form a real calendar date.
pub(crate) fn born_datetime(born: &BornDate) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(born.year, born.month, born.day)
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Elapsed age from the birth date to `now`.
pub(crate) fn age_between(born: &BornDate, now: NaiveDateTime) -> Option<Age> {
    let born_dt = born_datetime(born)?;
    let (years, months, days) = epoch_breakdown(now - born_dt)?;
    Some(Age {
        years,
        months,
        days,
    })
}

/// Distance between `now` and the birthday as stored, with the birth year
/// kept as-is rather than rolled forward to the next occurrence. Only the
/// month and day components are reported.
pub(crate) fn birthday_distance(born: &BornDate, now: NaiveDateTime) -> Option<NextBirthday> {
    let born_dt = born_datetime(born)?;
    let (_, months, days) = epoch_breakdown(born_dt - now)?;
    Some(NextBirthday { months, days })
}

fn epoch_breakdown(interval: TimeDelta) -> Option<(i32, u32, u32)> {
    let anchored = NaiveDateTime::UNIX_EPOCH.checked_add_signed(interval)?;
    Some((anchored.year() - 1970, anchored.month0(), anchored.day() - 1))
}
