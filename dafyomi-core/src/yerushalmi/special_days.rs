//! Study-free days of the Vilna Yerushalmi Yomi cycle.
//!
//! Yom Kippur and Tisha B'Av have no assigned page. When 9 Av falls on
//! Shabbat the fast, and with it the skipped day, moves to Sunday 10 Av.

use chrono::Weekday;

use super::Edition;
use crate::calendar::{HDate, HebrewMonth};
use crate::error::DafYomiResult;

/// Whether `hd` is a no-study day under the Vilna schedule.
pub fn is_no_study_day(hd: &HDate) -> bool {
    let day = hd.day();
    match hd.month() {
        HebrewMonth::Tishrei => day == 10,
        HebrewMonth::Av => {
            let weekday = hd.weekday();
            (day == 9 && weekday != Weekday::Sat) || (day == 10 && weekday == Weekday::Sun)
        }
        _ => false,
    }
}

fn yom_kippur(year: i32) -> DafYomiResult<i64> {
    Ok(HDate::new(year, HebrewMonth::Tishrei, 10)?.abs())
}

/// Observed Tisha B'Av, after the Shabbat postponement.
fn tisha_bav(year: i32) -> DafYomiResult<i64> {
    let ninth = HDate::new(year, HebrewMonth::Av, 9)?;
    if ninth.weekday() == Weekday::Sat {
        Ok(ninth.abs() + 1)
    } else {
        Ok(ninth.abs())
    }
}

/// Number of skipped days in the inclusive range `[start, end]`.
///
/// Always zero for editions that study every day.
pub fn count_special_days(edition: Edition, start: i64, end: i64) -> DafYomiResult<i64> {
    if !edition.skips_special_days() || end < start {
        return Ok(0);
    }

    let first_year = HDate::from_abs(start)?.year();
    let last_year = HDate::from_abs(end)?.year();
    let mut count = 0;
    for year in first_year..=last_year {
        for abs in [yom_kippur(year)?, tisha_bav(year)?] {
            if (start..=end).contains(&abs) {
                count += 1;
            }
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::abs_from_gregorian;
    use chrono::NaiveDate;

    fn abs(y: i32, m: u32, d: u32) -> i64 {
        abs_from_gregorian(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn count(edition: Edition, start: i64, end: i64) -> i64 {
        count_special_days(edition, start, end).unwrap()
    }

    #[test]
    fn test_fast_days_by_year() {
        assert_eq!(yom_kippur(5784).unwrap(), abs(2023, 9, 25));
        assert_eq!(tisha_bav(5783).unwrap(), abs(2023, 7, 27));
        // 9 Av 5785 was Shabbat, so the fast was kept on 3 August 2025.
        assert_eq!(tisha_bav(5785).unwrap(), abs(2025, 8, 3));
    }

    #[test]
    fn test_yom_kippur_is_always_skipped() {
        for year in 5741..5800 {
            let hd = HDate::new(year, HebrewMonth::Tishrei, 10).unwrap();
            assert!(is_no_study_day(&hd), "Yom Kippur {year}");
        }
    }

    #[test]
    fn test_tisha_bav_on_shabbat_moves_to_sunday() {
        // 9 Av 5782 was Shabbat, 6 August 2022.
        let ninth = HDate::new(5782, HebrewMonth::Av, 9).unwrap();
        assert_eq!(ninth.weekday(), Weekday::Sat);
        assert!(!is_no_study_day(&ninth));
        assert!(is_no_study_day(&ninth.next().unwrap()));
    }

    #[test]
    fn test_tisha_bav_on_weekday() {
        // 9 Av 5783 was Thursday, 27 July 2023.
        let ninth = HDate::new(5783, HebrewMonth::Av, 9).unwrap();
        assert!(is_no_study_day(&ninth));
        assert!(!is_no_study_day(&ninth.next().unwrap()));
    }

    #[test]
    fn test_ordinary_days_are_study_days() {
        let hd = HDate::new(5784, HebrewMonth::Nisan, 15).unwrap();
        assert!(!is_no_study_day(&hd));
        let hd = HDate::new(5784, HebrewMonth::Tishrei, 9).unwrap();
        assert!(!is_no_study_day(&hd));
    }

    #[test]
    fn test_count_in_calendar_year() {
        assert_eq!(count(Edition::Vilna, abs(2023, 1, 1), abs(2023, 12, 31)), 2);
    }

    #[test]
    fn test_count_range_is_inclusive() {
        let sunday = abs(2022, 8, 7);
        assert_eq!(count(Edition::Vilna, sunday, sunday), 1);
        assert_eq!(count(Edition::Vilna, sunday - 1, sunday - 1), 0);
        assert_eq!(count(Edition::Vilna, sunday + 1, sunday + 30), 0);
    }

    #[test]
    fn test_schottenstein_never_skips() {
        assert_eq!(
            count(Edition::Schottenstein, abs(2023, 1, 1), abs(2030, 12, 31)),
            0
        );
    }

    #[test]
    fn test_empty_range() {
        assert_eq!(count(Edition::Vilna, abs(2023, 9, 25), abs(2023, 9, 24)), 0);
    }
}
