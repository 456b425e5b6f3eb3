//! TUI rendering traits for dafyomi types.
//!
//! Extension traits that add colored terminal rendering to dafyomi-core
//! types using owo_colors.

use chrono::NaiveDate;
use dafyomi_core::Assignment;
use dafyomi_core::event::DafEvent;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Assignment {
    fn render(&self) -> String {
        match self {
            Assignment::Daf(daf) => daf.to_string().bold().to_string(),
            Assignment::NoStudy => self.to_string().dimmed().to_string(),
        }
    }
}

impl Render for DafEvent {
    fn render(&self) -> String {
        let hdate = format!("({})", self.hdate);
        format!("{} {}", self.assignment.render(), hdate.dimmed())
    }
}

/// Format a date as a label (e.g. "Today", "Tomorrow", "Wed Feb 25 2026")
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_label() {
        let today = date(2026, 2, 25);
        assert_eq!(date_label(today, today), "Today");
        assert_eq!(date_label(date(2026, 2, 26), today), "Tomorrow");
        assert_eq!(date_label(date(2026, 2, 24), today), "Yesterday");
        assert_eq!(date_label(date(2026, 3, 1), today), "Sun Mar 1 2026");
    }
}
