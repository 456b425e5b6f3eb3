//! ICS file generation.

use chrono::{Days, NaiveDate};
use icalendar::{Calendar, Component, Property, ValueType};

use crate::error::{DafYomiError, DafYomiResult};
use crate::event::DafEvent;

/// Generate one VCALENDAR with an all-day VEVENT per study day.
///
/// No-study days are left out.
pub fn generate_ics(events: &[DafEvent]) -> DafYomiResult<String> {
    let mut cal = Calendar::new();
    if let Some(first) = events.first() {
        cal.name(&first.cycle.to_string());
    }

    for event in events.iter().filter(|e| e.is_study_day()) {
        let end = event.date.checked_add_days(Days::new(1)).ok_or_else(|| {
            DafYomiError::IcsGenerate(format!("no day follows {}", event.date))
        })?;

        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&event.uid());
        ics_event.summary(&event.summary());
        ics_event.description(&format!("{} - {}", event.cycle, event.hdate));

        // DTSTAMP is required; derive it from the date so output is reproducible.
        ics_event.add_property("DTSTAMP", event.date.format("%Y%m%dT000000Z").to_string());
        add_date_property(&mut ics_event, "DTSTART", event.date);
        add_date_property(&mut ics_event, "DTEND", end);

        // Study sessions never block time
        ics_event.add_property("TRANSP", "TRANSPARENT");

        cal.push(ics_event.done());
    }

    Ok(strip_ics_bloat(&cal.done().to_string()))
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with DAFYOMI
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:DAFYOMI\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}
