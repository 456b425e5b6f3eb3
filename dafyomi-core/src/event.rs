//! Daily study events.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::HDate;
use crate::daf::Assignment;
use crate::schedule::Cycle;

/// The assignment for one day of one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DafEvent {
    pub date: NaiveDate,
    pub hdate: HDate,
    pub cycle: Cycle,
    pub assignment: Assignment,
}

impl DafEvent {
    /// Summary line, e.g. "Pesachim 103".
    pub fn summary(&self) -> String {
        self.assignment.to_string()
    }

    /// Stable identifier, one per cycle per day.
    pub fn uid(&self) -> String {
        format!("{}-{}@dafyomi", self.cycle.slug(), self.date.format("%Y%m%d"))
    }

    pub fn is_study_day(&self) -> bool {
        self.assignment.daf().is_some()
    }
}
