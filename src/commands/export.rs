use std::path::Path;

use anyhow::Result;
use dafyomi_core::date_range::DateRange;
use dafyomi_core::ics::generate_ics;
use dafyomi_core::{Cycle, DafCalendar};
use log::info;
use owo_colors::OwoColorize;

pub fn run(calendar: &DafCalendar, range: &DateRange, cycle: Cycle, path: &Path) -> Result<()> {
    let events = calendar.schedule(range, cycle)?;
    if events.is_empty() {
        anyhow::bail!(
            "No days to export: {} began on {}",
            cycle,
            calendar.epoch(cycle)
        );
    }

    let ics = generate_ics(&events)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, ics)?;
    info!("wrote {} events to {}", events.len(), path.display());

    let study_days = events.iter().filter(|e| e.is_study_day()).count();
    println!(
        "{} {} {} of {} to {}",
        "✓".green(),
        study_days,
        if study_days == 1 { "day" } else { "days" },
        cycle,
        path.display()
    );

    Ok(())
}
