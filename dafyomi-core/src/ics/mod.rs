//! ICS export of daf schedules.
//!
//! Writes RFC 5545 calendars that any calendar app can subscribe to or import.

mod generate;

pub use generate::generate_ics;
