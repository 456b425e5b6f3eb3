use anyhow::Result;
use dafyomi_core::config::DafYomiConfig;
use owo_colors::OwoColorize;

/// Effective settings as label/value pairs, in display order.
fn settings(config: &DafYomiConfig) -> Vec<(&'static str, String)> {
    vec![
        ("Cycle", config.default_cycle().to_string()),
        ("Edition", config.edition.to_string()),
        ("Days", config.days.to_string()),
    ]
}

pub fn run(config: &DafYomiConfig) -> Result<()> {
    let config_path = DafYomiConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Export:     {}", config.expanded_ics_path().display());

    println!();
    println!("{}", "Settings".bold());
    for (label, value) in settings(config) {
        println!("  {:<11} {}", format!("{label}:"), value);
    }

    Ok(())
}
