//! Yerushalmi Yomi: one page of the Jerusalem Talmud per day.
//!
//! Two page-numbering editions are followed. The Vilna schedule began on
//! 2 February 1980 and skips Yom Kippur and Tisha B'Av, so its cycle length
//! in calendar days varies. The Schottenstein schedule began on 14 November
//! 2022 and studies every day.

mod special_days;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::calendar::{HDate, abs_from_gregorian, describe_day, epoch_date};
use crate::daf::Assignment;
use crate::error::{DafYomiError, DafYomiResult};
use crate::locate::locate;
use crate::tractate::TractateTable;

pub use special_days::{count_special_days, is_no_study_day};

pub const CYCLE_NAME: &str = "Yerushalmi Yomi";

/// A cycle boundary settles within a couple of passes; at most two special
/// days fall in any year.
const MAX_BOUNDARY_PASSES: usize = 8;

/// Printed pagination followed by a Yerushalmi Yomi schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    #[default]
    Vilna,
    Schottenstein,
}

impl Edition {
    pub const ALL: [Edition; 2] = [Edition::Vilna, Edition::Schottenstein];

    /// Whether Yom Kippur and Tisha B'Av are study-free.
    pub fn skips_special_days(self) -> bool {
        self == Edition::Vilna
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Edition::Vilna => "vilna",
            Edition::Schottenstein => "schottenstein",
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edition::Vilna => f.write_str("Vilna"),
            Edition::Schottenstein => f.write_str("Schottenstein"),
        }
    }
}

impl FromStr for Edition {
    type Err = DafYomiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vilna" => Ok(Edition::Vilna),
            "schottenstein" => Ok(Edition::Schottenstein),
            _ => Err(DafYomiError::UnknownEdition(s.to_string())),
        }
    }
}

/// Calendar days covered by one cycle: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleSpan {
    /// 1-based, counted from the edition's epoch.
    pub number: i64,
    pub start: i64,
    pub end: i64,
}

impl CycleSpan {
    pub fn contains(&self, abs: i64) -> bool {
        (self.start..self.end).contains(&abs)
    }
}

#[derive(Debug, Clone)]
struct EditionSchedule {
    epoch: NaiveDate,
    start: i64,
    table: TractateTable,
}

impl EditionSchedule {
    fn new(epoch: NaiveDate, table: TractateTable) -> Self {
        EditionSchedule {
            epoch,
            start: abs_from_gregorian(epoch),
            table,
        }
    }
}

/// Resolves Yerushalmi Yomi assignments for both editions.
#[derive(Debug, Clone)]
pub struct YerushalmiYomi {
    vilna: EditionSchedule,
    schottenstein: EditionSchedule,
}

impl Default for YerushalmiYomi {
    fn default() -> Self {
        Self::new()
    }
}

impl YerushalmiYomi {
    pub fn new() -> Self {
        YerushalmiYomi {
            vilna: EditionSchedule::new(epoch_date(1980, 2, 2), TractateTable::yerushalmi_vilna()),
            schottenstein: EditionSchedule::new(
                epoch_date(2022, 11, 14),
                TractateTable::yerushalmi_schottenstein(),
            ),
        }
    }

    fn schedule(&self, edition: Edition) -> &EditionSchedule {
        match edition {
            Edition::Vilna => &self.vilna,
            Edition::Schottenstein => &self.schottenstein,
        }
    }

    pub fn epoch(&self, edition: Edition) -> NaiveDate {
        self.schedule(edition).epoch
    }

    pub fn table(&self, edition: Edition) -> &TractateTable {
        &self.schedule(edition).table
    }

    fn ensure_started(&self, abs: i64, edition: Edition) -> DafYomiResult<()> {
        let schedule = self.schedule(edition);
        if abs < schedule.start {
            return Err(DafYomiError::BeforeCycleStart {
                cycle: format!("{CYCLE_NAME} ({edition})"),
                date: describe_day(abs),
                epoch: schedule.epoch,
            });
        }
        Ok(())
    }

    /// First day of the cycle following the one that opens on `start`.
    ///
    /// Skipped days inside the cycle lengthen it, which can pull more skipped
    /// days in, so the boundary is iterated until the count stops changing.
    fn cycle_end(&self, start: i64, edition: Edition) -> DafYomiResult<i64> {
        let base = self.table(edition).total_days();
        let mut end = start + base;
        for pass in 0..MAX_BOUNDARY_PASSES {
            let next = start + base + count_special_days(edition, start, end)?;
            trace!("{edition} cycle from {start}: pass {pass} boundary {end} -> {next}");
            if next == end {
                return Ok(end);
            }
            end = next;
        }
        panic!("{edition} cycle boundary from day {start} did not settle");
    }

    fn span_from(&self, number: i64, start: i64, edition: Edition) -> Option<CycleSpan> {
        match self.cycle_end(start, edition) {
            Ok(end) => Some(CycleSpan { number, start, end }),
            Err(err) => {
                warn!("{edition} cycle {number} from day {start}: {err}");
                None
            }
        }
    }

    /// Consecutive cycles from the edition's epoch onward. Ends only where
    /// the calendar runs out of range.
    pub fn cycle_spans(&self, edition: Edition) -> impl Iterator<Item = CycleSpan> + '_ {
        let first = self.span_from(1, self.schedule(edition).start, edition);
        std::iter::successors(first, move |prev| {
            self.span_from(prev.number + 1, prev.end, edition)
        })
    }

    /// The cycle containing absolute day `abs`.
    pub fn cycle_span(&self, abs: i64, edition: Edition) -> DafYomiResult<CycleSpan> {
        self.ensure_started(abs, edition)?;

        let span = self
            .cycle_spans(edition)
            .find(|span| abs < span.end)
            .ok_or(DafYomiError::DateOutOfRange(abs))?;
        debug!(
            "{edition} day {abs}: cycle {} spans [{}, {})",
            span.number, span.start, span.end
        );
        Ok(span)
    }

    /// The assignment for absolute day `abs`.
    pub fn resolve_abs(&self, abs: i64, edition: Edition) -> DafYomiResult<Assignment> {
        self.resolve(&HDate::from_abs(abs)?, edition)
    }

    pub fn resolve_date(&self, date: NaiveDate, edition: Edition) -> DafYomiResult<Assignment> {
        self.resolve_abs(abs_from_gregorian(date), edition)
    }

    /// The assignment for `hd`, or [`Assignment::NoStudy`] on a skipped day.
    pub fn resolve(&self, hd: &HDate, edition: Edition) -> DafYomiResult<Assignment> {
        let abs = hd.abs();
        self.ensure_started(abs, edition)?;

        if edition.skips_special_days() && is_no_study_day(hd) {
            debug!("{edition} day {abs} ({hd}) is a no-study day");
            return Ok(Assignment::NoStudy);
        }

        let span = self.cycle_span(abs, edition)?;
        let offset = abs - span.start - count_special_days(edition, span.start, abs)?;
        Ok(Assignment::Daf(locate(offset, self.table(edition))))
    }
}
