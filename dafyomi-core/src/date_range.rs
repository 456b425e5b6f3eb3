//! Inclusive Gregorian date ranges for schedules.

use chrono::{Days, NaiveDate};

use crate::error::{DafYomiError, DafYomiResult};

/// Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// `days` consecutive days starting at `from`.
    pub fn starting_at(from: NaiveDate, days: u32) -> Self {
        let span = u64::from(days.max(1) - 1);
        DateRange {
            from,
            to: from.checked_add_days(Days::new(span)).unwrap_or(NaiveDate::MAX),
        }
    }

    /// Build a range from optional YYYY-MM-DD arguments.
    /// - `from` defaults to `today`
    /// - `to` defaults to `days` days starting at `from`
    pub fn from_args(
        from: Option<&str>,
        to: Option<&str>,
        today: NaiveDate,
        days: u32,
    ) -> DafYomiResult<Self> {
        let from = match from {
            Some(s) => parse_date(s)?,
            None => today,
        };

        match to {
            Some(s) => {
                let to = parse_date(s)?;
                if to < from {
                    return Err(DafYomiError::InvalidDate(format!("{s} is before {from}")));
                }
                Ok(DateRange { from, to })
            }
            None => Ok(Self::starting_at(from, days)),
        }
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.from.iter_days().take_while(move |d| *d <= self.to)
    }
}

/// Parse YYYY-MM-DD.
pub fn parse_date(s: &str) -> DafYomiResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| DafYomiError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults_to_a_week_from_today() {
        let today = date(2024, 2, 27);
        let range = DateRange::from_args(None, None, today, 7).unwrap();
        assert_eq!(range.from, today);
        assert_eq!(range.to, date(2024, 3, 4));
        assert_eq!(range.days().count(), 7);
    }

    #[test]
    fn test_explicit_bounds() {
        let range =
            DateRange::from_args(Some("2023-09-20"), Some("2023-09-30"), date(2000, 1, 1), 7)
                .unwrap();
        assert_eq!(range.days().count(), 11);
        assert_eq!(range.days().last(), Some(date(2023, 9, 30)));
    }

    #[test]
    fn test_rejects_bad_input() {
        let today = date(2024, 1, 1);
        assert!(matches!(
            DateRange::from_args(Some("20-01-2024"), None, today, 7),
            Err(DafYomiError::InvalidDate(_))
        ));
        assert!(matches!(
            DateRange::from_args(Some("2024-01-10"), Some("2024-01-09"), today, 7),
            Err(DafYomiError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_zero_days_still_covers_start() {
        let range = DateRange::starting_at(date(2024, 1, 1), 0);
        assert_eq!(range.days().count(), 1);
    }
}
