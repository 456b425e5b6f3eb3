//! Hebrew calendar dates on the absolute day axis.
//!
//! Calendar arithmetic comes from `icu_calendar`. `HDate` keeps the decoded
//! year, month and day alongside the absolute day so the no-study rules can
//! read them without another conversion.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use icu_calendar::Date;
use icu_calendar::hebrew::Hebrew;
use serde::Serialize;

use super::gregorian::{abs_from_gregorian, gregorian_from_abs, weekday_from_abs};
use crate::error::{DafYomiError, DafYomiResult};

/// Hebrew months, numbered from Nisan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HebrewMonth {
    Nisan = 1,
    Iyyar,
    Sivan,
    Tamuz,
    Av,
    Elul,
    Tishrei,
    Cheshvan,
    Kislev,
    Tevet,
    Shvat,
    AdarI,
    AdarII,
}

impl HebrewMonth {
    pub fn from_number(n: u8) -> Option<Self> {
        use HebrewMonth::*;
        Some(match n {
            1 => Nisan,
            2 => Iyyar,
            3 => Sivan,
            4 => Tamuz,
            5 => Av,
            6 => Elul,
            7 => Tishrei,
            8 => Cheshvan,
            9 => Kislev,
            10 => Tevet,
            11 => Shvat,
            12 => AdarI,
            13 => AdarII,
            _ => return None,
        })
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Position within the year counted from Tishrei, as `icu_calendar` numbers
    /// months. Nisan moves down one place in a leap year.
    fn ordinal(self, leap_year: bool) -> u8 {
        use HebrewMonth::*;
        let nisan = if leap_year { 8 } else { 7 };
        match self {
            Tishrei => 1,
            Cheshvan => 2,
            Kislev => 3,
            Tevet => 4,
            Shvat => 5,
            AdarI => 6,
            AdarII => 7,
            Nisan => nisan,
            Iyyar => nisan + 1,
            Sivan => nisan + 2,
            Tamuz => nisan + 3,
            Av => nisan + 4,
            Elul => nisan + 5,
        }
    }

    fn from_ordinal(ordinal: u32, leap_year: bool) -> Option<Self> {
        use HebrewMonth::*;
        let nisan = if leap_year { 8 } else { 7 };
        Some(match ordinal {
            1 => Tishrei,
            2 => Cheshvan,
            3 => Kislev,
            4 => Tevet,
            5 => Shvat,
            6 => AdarI,
            7 if leap_year => AdarII,
            n if (nisan..nisan + 6).contains(&n) => {
                [Nisan, Iyyar, Sivan, Tamuz, Av, Elul][(n - nisan) as usize]
            }
            _ => return None,
        })
    }

    /// English transliteration. Adar I is plain "Adar" outside leap years.
    pub fn name(self, leap_year: bool) -> &'static str {
        use HebrewMonth::*;
        match self {
            Nisan => "Nisan",
            Iyyar => "Iyyar",
            Sivan => "Sivan",
            Tamuz => "Tamuz",
            Av => "Av",
            Elul => "Elul",
            Tishrei => "Tishrei",
            Cheshvan => "Cheshvan",
            Kislev => "Kislev",
            Tevet => "Tevet",
            Shvat => "Sh'vat",
            AdarI if leap_year => "Adar I",
            AdarI => "Adar",
            AdarII => "Adar II",
        }
    }
}

fn calendar_error(err: impl fmt::Display) -> DafYomiError {
    DafYomiError::Calendar(err.to_string())
}

/// 1 Tishrei of `year`.
fn new_year(year: i32) -> DafYomiResult<Date<Hebrew>> {
    Date::try_new_hebrew_date(year, 1, 1).map_err(calendar_error)
}

pub fn months_in_year(year: i32) -> DafYomiResult<u8> {
    Ok(new_year(year)?.months_in_year())
}

pub fn is_leap_year(year: i32) -> DafYomiResult<bool> {
    Ok(months_in_year(year)? == 13)
}

pub fn days_in_year(year: i32) -> DafYomiResult<i64> {
    Ok(i64::from(new_year(year)?.days_in_year()))
}

/// A date in the Hebrew calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HDate {
    year: i32,
    month: HebrewMonth,
    day: u8,
    #[serde(skip)]
    leap_year: bool,
    #[serde(skip)]
    abs: i64,
}

impl HDate {
    /// Creates a validated Hebrew date.
    pub fn new(year: i32, month: HebrewMonth, day: u8) -> DafYomiResult<Self> {
        let invalid = |leap_year: bool| DafYomiError::InvalidHebrewDate {
            year,
            month: month.name(leap_year).to_string(),
            day,
        };
        if year < 1 {
            return Err(invalid(false));
        }

        let leap_year = is_leap_year(year)?;
        if month == HebrewMonth::AdarII && !leap_year {
            return Err(invalid(leap_year));
        }
        let first = Date::try_new_hebrew_date(year, month.ordinal(leap_year), 1)
            .map_err(|_| invalid(leap_year))?;
        if day == 0 || day > first.days_in_month() {
            return Err(invalid(leap_year));
        }

        Self::from_icu(&first)?.plus_days(i64::from(day) - 1)
    }

    fn from_icu(date: &Date<Hebrew>) -> DafYomiResult<Self> {
        let leap_year = date.months_in_year() == 13;
        let ordinal = date.month().ordinal;
        let month = HebrewMonth::from_ordinal(ordinal, leap_year)
            .ok_or_else(|| calendar_error(format!("unexpected Hebrew month ordinal {ordinal}")))?;
        let day = u8::try_from(date.day_of_month().0).map_err(calendar_error)?;

        let iso = date.to_iso();
        let gregorian =
            NaiveDate::from_ymd_opt(iso.year().number, iso.month().ordinal, iso.day_of_month().0)
                .ok_or_else(|| calendar_error(format!("no Gregorian date for {day} {ordinal}")))?;

        Ok(HDate {
            year: date.year().number,
            month,
            day,
            leap_year,
            abs: abs_from_gregorian(gregorian),
        })
    }

    pub fn from_gregorian(date: NaiveDate) -> DafYomiResult<Self> {
        let month = u8::try_from(date.month()).map_err(calendar_error)?;
        let day = u8::try_from(date.day()).map_err(calendar_error)?;
        let iso = Date::try_new_iso_date(date.year(), month, day).map_err(calendar_error)?;
        Self::from_icu(&iso.to_calendar(Hebrew::new()))
    }

    pub fn from_abs(abs: i64) -> DafYomiResult<Self> {
        Self::from_gregorian(gregorian_from_abs(abs)?)
    }

    fn plus_days(self, days: i64) -> DafYomiResult<Self> {
        if days == 0 {
            Ok(self)
        } else {
            Self::from_abs(self.abs + days)
        }
    }

    pub fn abs(&self) -> i64 {
        self.abs
    }

    pub fn to_gregorian(&self) -> DafYomiResult<NaiveDate> {
        gregorian_from_abs(self.abs)
    }

    pub fn weekday(&self) -> Weekday {
        weekday_from_abs(self.abs)
    }

    /// The following day.
    pub fn next(&self) -> DafYomiResult<Self> {
        self.plus_days(1)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> HebrewMonth {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn is_leap_year(&self) -> bool {
        self.leap_year
    }
}

impl fmt::Display for HDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.day,
            self.month.name(self.leap_year),
            self.year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greg(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rosh_hashana_5784() {
        let hd = HDate::new(5784, HebrewMonth::Tishrei, 1).unwrap();
        assert_eq!(hd.to_gregorian().unwrap(), greg(2023, 9, 16));
        assert_eq!(hd.weekday(), Weekday::Sat);
    }

    #[test]
    fn test_known_conversions() {
        let cases = [
            (greg(2023, 9, 25), 5784, HebrewMonth::Tishrei, 10),
            (greg(2023, 7, 27), 5783, HebrewMonth::Av, 9),
            (greg(2024, 3, 24), 5784, HebrewMonth::AdarII, 14),
            (greg(2025, 3, 14), 5785, HebrewMonth::AdarI, 14),
            (greg(1980, 2, 2), 5740, HebrewMonth::Shvat, 15),
            (greg(2024, 4, 9), 5784, HebrewMonth::Nisan, 1),
        ];
        for (date, year, month, day) in cases {
            let hd = HDate::from_gregorian(date).unwrap();
            assert_eq!(
                (hd.year(), hd.month(), hd.day()),
                (year, month, day),
                "converting {date}"
            );
            assert_eq!(hd.to_gregorian().unwrap(), date);
            assert_eq!(HDate::new(year, month, day).unwrap(), hd, "building {hd}");
        }
    }

    #[test]
    fn test_year_lengths() {
        assert_eq!(days_in_year(5783).unwrap(), 355);
        assert_eq!(days_in_year(5784).unwrap(), 383);
        assert_eq!(days_in_year(5785).unwrap(), 355);
        assert!(is_leap_year(5784).unwrap());
        assert!(!is_leap_year(5785).unwrap());
        assert_eq!(months_in_year(5784).unwrap(), 13);
    }

    #[test]
    fn test_abs_roundtrip_across_several_years() {
        let start = abs_from_gregorian(greg(2019, 1, 1));
        for abs in start..start + 3 * 366 {
            let hd = HDate::from_abs(abs).unwrap();
            assert_eq!(hd.abs(), abs);
            assert_eq!(HDate::new(hd.year(), hd.month(), hd.day()).unwrap().abs(), abs);
        }
    }

    #[test]
    fn test_month_ordinals_roundtrip() {
        for leap_year in [false, true] {
            for n in 1..=13 {
                let month = HebrewMonth::from_number(n).unwrap();
                if month == HebrewMonth::AdarII && !leap_year {
                    continue;
                }
                let ordinal = u32::from(month.ordinal(leap_year));
                assert_eq!(HebrewMonth::from_ordinal(ordinal, leap_year), Some(month));
            }
        }
        assert_eq!(HebrewMonth::from_ordinal(13, false), None);
    }

    #[test]
    fn test_invalid_dates_rejected() {
        assert!(HDate::new(5785, HebrewMonth::AdarII, 1).is_err());
        assert!(HDate::new(5784, HebrewMonth::Iyyar, 30).is_err());
        assert!(HDate::new(5784, HebrewMonth::Nisan, 0).is_err());
    }

    #[test]
    fn test_display() {
        let hd = HDate::new(5784, HebrewMonth::Tishrei, 10).unwrap();
        assert_eq!(hd.to_string(), "10 Tishrei 5784");
        let adar = HDate::new(5785, HebrewMonth::AdarI, 14).unwrap();
        assert_eq!(adar.to_string(), "14 Adar 5785");
    }

    #[test]
    fn test_next_crosses_new_year() {
        let erev = HDate::new(5783, HebrewMonth::Elul, 29).unwrap();
        let next = erev.next().unwrap();
        assert_eq!((next.year(), next.month(), next.day()), (5784, HebrewMonth::Tishrei, 1));
    }
}
