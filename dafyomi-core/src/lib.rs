//! Core types for the dafyomi ecosystem.
//!
//! Resolves the daily Talmud page for the Babylonian Daf Yomi cycle and the
//! Jerusalem Talmud Yerushalmi Yomi cycle (Vilna and Schottenstein editions).
//! - `bavli` and `yerushalmi` hold the cycle resolvers
//! - `tractate` and `locate` map an in-cycle offset to a tractate and page
//! - `calendar` converts Gregorian and Hebrew dates to absolute day numbers
//! - `schedule`, `event` and `ics` build day-by-day schedules and export them

pub mod bavli;
pub mod calendar;
pub mod config;
pub mod constants;
pub mod daf;
pub mod date_range;
pub mod error;
pub mod event;
pub mod ics;
pub mod locate;
pub mod schedule;
pub mod tractate;
pub mod yerushalmi;

pub use bavli::{BavliYomi, CyclePosition};
pub use daf::{Assignment, Daf};
pub use error::{DafYomiError, DafYomiResult};
pub use schedule::{Cycle, CycleKind, DafCalendar};
pub use yerushalmi::{CycleSpan, Edition, YerushalmiYomi};
