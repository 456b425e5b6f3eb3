use anyhow::Result;
use chrono::NaiveDate;
use dafyomi_core::{Cycle, DafCalendar};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(calendar: &DafCalendar, date: NaiveDate, cycle: Cycle, json: bool) -> Result<()> {
    let event = calendar.event(date, cycle)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&event)?);
        return Ok(());
    }

    println!("{} {}", cycle.to_string().bold(), date.format("%a %b %-d %Y").dimmed());
    println!("  {}", event.render());

    Ok(())
}
