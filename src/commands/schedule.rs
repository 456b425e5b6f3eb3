use anyhow::Result;
use chrono::NaiveDate;
use dafyomi_core::date_range::DateRange;
use dafyomi_core::{Cycle, DafCalendar};
use owo_colors::OwoColorize;

use crate::render::{Render, date_label};

pub fn run(calendar: &DafCalendar, range: &DateRange, cycle: Cycle, today: NaiveDate) -> Result<()> {
    let events = calendar.schedule(range, cycle)?;

    if events.is_empty() {
        let epoch = calendar.epoch(cycle);
        println!("{}", format!("{cycle} began on {epoch}").dimmed());
        return Ok(());
    }

    println!("{}", cycle.to_string().bold());
    for event in &events {
        let label = format!("{:>16}", date_label(event.date, today));
        if event.date == today {
            println!("  {} {}", label.green(), event.render());
        } else {
            println!("  {} {}", label, event.render());
        }
    }

    Ok(())
}
