//! Gregorian dates on the absolute day axis.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{DafYomiError, DafYomiResult};

/// Absolute day number of a Gregorian date.
pub fn abs_from_gregorian(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

/// Gregorian date for an absolute day number.
pub fn gregorian_from_abs(abs: i64) -> DafYomiResult<NaiveDate> {
    i32::try_from(abs)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or(DafYomiError::DateOutOfRange(abs))
}

/// Gregorian rendering of `abs` for messages, falling back to the raw day.
pub fn describe_day(abs: i64) -> String {
    gregorian_from_abs(abs)
        .map(|d| d.to_string())
        .unwrap_or_else(|_| format!("day {abs}"))
}

/// Weekday of an absolute day number. R.D. 1 is a Monday.
pub fn weekday_from_abs(abs: i64) -> Weekday {
    match abs.rem_euclid(7) {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

/// A fixed, known-valid Gregorian date used as a cycle epoch.
pub fn epoch_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("cycle epochs are valid Gregorian dates")
}
