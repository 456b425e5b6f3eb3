//! Cycle selection and day-by-day schedules.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::bavli::{self, BavliYomi};
use crate::calendar::HDate;
use crate::daf::Assignment;
use crate::date_range::DateRange;
use crate::error::{DafYomiError, DafYomiResult};
use crate::event::DafEvent;
use crate::yerushalmi::{self, Edition, YerushalmiYomi};

/// Which Talmud a schedule follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleKind {
    #[default]
    Bavli,
    Yerushalmi,
}

impl FromStr for CycleKind {
    type Err = DafYomiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bavli" => Ok(CycleKind::Bavli),
            "yerushalmi" => Ok(CycleKind::Yerushalmi),
            _ => Err(DafYomiError::UnknownCycle(s.to_string())),
        }
    }
}

/// A fully specified study cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cycle {
    Bavli,
    Yerushalmi(Edition),
}

impl Cycle {
    /// `edition` only matters for the Yerushalmi.
    pub fn new(kind: CycleKind, edition: Edition) -> Self {
        match kind {
            CycleKind::Bavli => Cycle::Bavli,
            CycleKind::Yerushalmi => Cycle::Yerushalmi(edition),
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Cycle::Bavli => "bavli",
            Cycle::Yerushalmi(Edition::Vilna) => "yerushalmi-vilna",
            Cycle::Yerushalmi(Edition::Schottenstein) => "yerushalmi-schottenstein",
        }
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cycle::Bavli => f.write_str(bavli::CYCLE_NAME),
            Cycle::Yerushalmi(edition) => write!(f, "{} ({edition})", yerushalmi::CYCLE_NAME),
        }
    }
}

/// Entry point for lookups across every cycle.
///
/// Construct once and share; all epochs and tables are fixed here.
#[derive(Debug, Clone, Default)]
pub struct DafCalendar {
    bavli: BavliYomi,
    yerushalmi: YerushalmiYomi,
}

impl DafCalendar {
    pub fn new() -> Self {
        DafCalendar {
            bavli: BavliYomi::new(),
            yerushalmi: YerushalmiYomi::new(),
        }
    }

    pub fn bavli(&self) -> &BavliYomi {
        &self.bavli
    }

    pub fn yerushalmi(&self) -> &YerushalmiYomi {
        &self.yerushalmi
    }

    /// First day of `cycle`.
    pub fn epoch(&self, cycle: Cycle) -> NaiveDate {
        match cycle {
            Cycle::Bavli => self.bavli.epoch(),
            Cycle::Yerushalmi(edition) => self.yerushalmi.epoch(edition),
        }
    }

    pub fn lookup(&self, date: NaiveDate, cycle: Cycle) -> DafYomiResult<Assignment> {
        match cycle {
            Cycle::Bavli => self.bavli.resolve_date(date).map(Assignment::Daf),
            Cycle::Yerushalmi(edition) => self.yerushalmi.resolve_date(date, edition),
        }
    }

    pub fn event(&self, date: NaiveDate, cycle: Cycle) -> DafYomiResult<DafEvent> {
        Ok(DafEvent {
            date,
            hdate: HDate::from_gregorian(date)?,
            cycle,
            assignment: self.lookup(date, cycle)?,
        })
    }

    /// One event per day of `range`. Days before the cycle began are left out.
    pub fn schedule(&self, range: &DateRange, cycle: Cycle) -> DafYomiResult<Vec<DafEvent>> {
        let epoch = self.epoch(cycle);
        if range.from < epoch {
            debug!("{cycle} schedule clipped to start at {epoch}");
        }
        range
            .days()
            .filter(|d| *d >= epoch)
            .map(|d| self.event(d, cycle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daf::Daf;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cycle_kind_parsing() {
        assert_eq!("Bavli".parse::<CycleKind>().unwrap(), CycleKind::Bavli);
        assert_eq!("yerushalmi".parse::<CycleKind>().unwrap(), CycleKind::Yerushalmi);
        assert!(matches!("mishna".parse::<CycleKind>(), Err(DafYomiError::UnknownCycle(_))));
    }

    #[test]
    fn test_cycle_new_ignores_edition_for_bavli() {
        assert_eq!(Cycle::new(CycleKind::Bavli, Edition::Schottenstein), Cycle::Bavli);
        assert_eq!(
            Cycle::new(CycleKind::Yerushalmi, Edition::Schottenstein),
            Cycle::Yerushalmi(Edition::Schottenstein)
        );
    }

    #[test]
    fn test_cycle_display() {
        assert_eq!(Cycle::Bavli.to_string(), "Daf Yomi");
        assert_eq!(
            Cycle::Yerushalmi(Edition::Vilna).to_string(),
            "Yerushalmi Yomi (Vilna)"
        );
    }

    #[test]
    fn test_lookup_dispatches_by_cycle() {
        let cal = DafCalendar::new();
        let d = date(2020, 1, 5);
        assert_eq!(
            cal.lookup(d, Cycle::Bavli).unwrap(),
            Assignment::Daf(Daf {
                tractate: "Berachot",
                page: 2
            })
        );
        assert_eq!(
            cal.lookup(date(2023, 9, 25), Cycle::Yerushalmi(Edition::Vilna)).unwrap(),
            Assignment::NoStudy
        );
    }

    #[test]
    fn test_schedule_includes_no_study_days() {
        let cal = DafCalendar::new();
        let range = DateRange {
            from: date(2023, 9, 24),
            to: date(2023, 9, 26),
        };
        let events = cal.schedule(&range, Cycle::Yerushalmi(Edition::Vilna)).unwrap();
        let rendered: Vec<_> = events.iter().map(|e| e.summary()).collect();
        assert_eq!(rendered, vec!["Maaser Sheni 15", "No daf today", "Maaser Sheni 16"]);
    }

    #[test]
    fn test_schedule_clips_to_epoch() {
        let cal = DafCalendar::new();
        let range = DateRange {
            from: date(2022, 11, 10),
            to: date(2022, 11, 15),
        };
        let events = cal
            .schedule(&range, Cycle::Yerushalmi(Edition::Schottenstein))
            .unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].date, date(2022, 11, 14));
        assert_eq!(events[0].summary(), "Berakhot 1");
        assert_eq!(events[1].summary(), "Berakhot 2");
    }

    #[test]
    fn test_lookup_before_epoch_errors() {
        let cal = DafCalendar::new();
        assert!(matches!(
            cal.lookup(date(1900, 1, 1), Cycle::Bavli),
            Err(DafYomiError::BeforeCycleStart { .. })
        ));
    }
}
