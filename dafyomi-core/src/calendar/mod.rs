//! Calendar collaborators for cycle arithmetic.
//!
//! All cycle math runs on absolute day numbers (R.D., where 1 January 1 CE is
//! day 1). This module converts Gregorian and Hebrew dates to and from that
//! axis and answers the weekday questions the no-study rules need.

mod gregorian;
mod hebrew;

pub use gregorian::{
    abs_from_gregorian, describe_day, epoch_date, gregorian_from_abs, weekday_from_abs,
};
pub use hebrew::{HDate, HebrewMonth, days_in_year, is_leap_year, months_in_year};
