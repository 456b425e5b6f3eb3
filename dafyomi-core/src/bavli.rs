//! Daf Yomi: one page of the Babylonian Talmud per day.
//!
//! The cycle began on 11 September 1923. Cycles 1 through 7 used a shorter
//! Shekalim; from cycle 8 (24 June 1975) onward the standard pagination
//! applies. Every calendar day is a study day.

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use crate::calendar::{abs_from_gregorian, describe_day, epoch_date};
use crate::daf::Daf;
use crate::error::{DafYomiError, DafYomiResult};
use crate::locate::locate;
use crate::tractate::TractateTable;

pub const CYCLE_NAME: &str = "Daf Yomi";

/// Cycle number of the first cycle using the standard table.
const NEW_CYCLE_BASE: i64 = 8;

/// Where a day falls within the sequence of cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CyclePosition {
    /// 1-based cycle number, counted from 1923.
    pub cycle: i64,
    /// Study days elapsed since the cycle began.
    pub offset: i64,
}

/// Resolves Daf Yomi assignments. Epochs are fixed at construction.
#[derive(Debug, Clone)]
pub struct BavliYomi {
    old_epoch: NaiveDate,
    old_start: i64,
    new_start: i64,
    old_table: TractateTable,
    new_table: TractateTable,
}

impl Default for BavliYomi {
    fn default() -> Self {
        Self::new()
    }
}

impl BavliYomi {
    pub fn new() -> Self {
        let old_epoch = epoch_date(1923, 9, 11);
        BavliYomi {
            old_epoch,
            old_start: abs_from_gregorian(old_epoch),
            new_start: abs_from_gregorian(epoch_date(1975, 6, 24)),
            old_table: TractateTable::bavli_old_cycle(),
            new_table: TractateTable::bavli(),
        }
    }

    /// First day of cycle 1.
    pub fn epoch(&self) -> NaiveDate {
        self.old_epoch
    }

    /// Table and start day governing `abs`, plus the cycle number of that start.
    fn regime(&self, abs: i64) -> (&TractateTable, i64, i64) {
        if abs >= self.new_start {
            (&self.new_table, self.new_start, NEW_CYCLE_BASE)
        } else {
            (&self.old_table, self.old_start, 1)
        }
    }

    pub fn position(&self, abs: i64) -> DafYomiResult<CyclePosition> {
        if abs < self.old_start {
            return Err(DafYomiError::BeforeCycleStart {
                cycle: CYCLE_NAME.to_string(),
                date: describe_day(abs),
                epoch: self.old_epoch,
            });
        }

        let (table, start, base) = self.regime(abs);
        let length = table.total_days();
        let elapsed = abs - start;
        Ok(CyclePosition {
            cycle: base + elapsed / length,
            offset: elapsed % length,
        })
    }

    /// The daf studied on absolute day `abs`.
    pub fn resolve(&self, abs: i64) -> DafYomiResult<Daf> {
        let position = self.position(abs)?;
        let (table, _, _) = self.regime(abs);
        debug!(
            "daf yomi day {abs}: cycle {} offset {} of {}",
            position.cycle,
            position.offset,
            table.total_days()
        );
        Ok(locate(position.offset, table))
    }

    pub fn resolve_date(&self, date: NaiveDate) -> DafYomiResult<Daf> {
        self.resolve(abs_from_gregorian(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn daf(tractate: &'static str, page: u32) -> Daf {
        Daf { tractate, page }
    }

    #[test]
    fn test_first_day_of_first_cycle() {
        let bavli = BavliYomi::new();
        assert_eq!(bavli.resolve_date(date(1923, 9, 11)).unwrap(), daf("Berachot", 2));
    }

    #[test]
    fn test_day_before_epoch_is_rejected() {
        let bavli = BavliYomi::new();
        let err = bavli.resolve_date(date(1923, 9, 10)).unwrap_err();
        assert!(matches!(err, DafYomiError::BeforeCycleStart { .. }));
    }

    #[test]
    fn test_regime_boundary() {
        let bavli = BavliYomi::new();
        let epoch = abs_from_gregorian(date(1975, 6, 24));

        let before = bavli.position(epoch - 1).unwrap();
        assert_eq!(before, CyclePosition { cycle: 7, offset: 2701 });
        assert_eq!(bavli.resolve(epoch - 1).unwrap(), daf("Niddah", 73));

        let at = bavli.position(epoch).unwrap();
        assert_eq!(at, CyclePosition { cycle: 8, offset: 0 });
        assert_eq!(bavli.resolve(epoch).unwrap(), daf("Berachot", 2));
    }

    #[test]
    fn test_siyum_hashas_dates_start_new_cycles() {
        let bavli = BavliYomi::new();
        for (d, cycle) in [
            (date(2012, 8, 3), 13),
            (date(2020, 1, 5), 14),
            (date(2027, 6, 8), 15),
        ] {
            let abs = abs_from_gregorian(d);
            assert_eq!(bavli.position(abs).unwrap(), CyclePosition { cycle, offset: 0 });
            assert_eq!(bavli.resolve(abs).unwrap(), daf("Berachot", 2));
        }
    }

    #[test]
    fn test_known_dates() {
        let bavli = BavliYomi::new();
        assert_eq!(bavli.resolve_date(date(2024, 3, 15)).unwrap(), daf("Baba Metzia", 16));
        assert_eq!(bavli.resolve_date(date(1990, 1, 1)).unwrap(), daf("Keritot", 20));
        assert_eq!(bavli.resolve_date(date(2009, 11, 11)).unwrap(), daf("Baba Batra", 82));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let bavli = BavliYomi::new();
        let d = date(2001, 2, 3);
        assert_eq!(bavli.resolve_date(d).unwrap(), bavli.resolve_date(d).unwrap());
    }
}
