mod commands;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dafyomi_core::config::DafYomiConfig;
use dafyomi_core::date_range::{DateRange, parse_date};
use dafyomi_core::{Cycle, CycleKind, DafCalendar, Edition};

#[derive(Parser)]
#[command(name = "dafyomi")]
#[command(about = "Look up the daily Talmud page for the Daf Yomi and Yerushalmi Yomi cycles")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CycleArgs {
    /// Cycle to follow: "bavli" or "yerushalmi" (defaults to config)
    #[arg(short, long)]
    cycle: Option<String>,

    /// Yerushalmi edition: "vilna" or "schottenstein" (defaults to config)
    #[arg(short, long)]
    edition: Option<String>,
}

impl CycleArgs {
    fn resolve(&self, config: &DafYomiConfig) -> Result<Cycle> {
        let kind = match &self.cycle {
            Some(s) => s.parse::<CycleKind>()?,
            None => config.cycle,
        };
        let edition = match &self.edition {
            Some(s) => s.parse::<Edition>()?,
            None => config.edition,
        };
        Ok(Cycle::new(kind, edition))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the daf for one day
    Daf {
        /// Date to look up (YYYY-MM-DD, defaults to today)
        date: Option<String>,

        #[command(flatten)]
        cycle: CycleArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the daf for a range of days
    Schedule {
        /// First day (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        from: Option<String>,

        /// Last day (YYYY-MM-DD, defaults to `days` from config)
        #[arg(long)]
        to: Option<String>,

        #[command(flatten)]
        cycle: CycleArgs,
    },
    /// Write a range of days to an .ics file
    Export {
        /// First day (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        from: Option<String>,

        /// Last day (YYYY-MM-DD, defaults to `days` from config)
        #[arg(long)]
        to: Option<String>,

        #[command(flatten)]
        cycle: CycleArgs,

        /// Output file (defaults to ics_path from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show configuration paths and settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = DafYomiConfig::load()?;
    let calendar = DafCalendar::new();
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Commands::Daf { date, cycle, json } => {
            let cycle = cycle.resolve(&config)?;
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => today,
            };
            commands::daf::run(&calendar, date, cycle, json)
        }
        Commands::Schedule { from, to, cycle } => {
            let cycle = cycle.resolve(&config)?;
            let range = DateRange::from_args(from.as_deref(), to.as_deref(), today, config.days)?;
            commands::schedule::run(&calendar, &range, cycle, today)
        }
        Commands::Export {
            from,
            to,
            cycle,
            output,
        } => {
            let cycle = cycle.resolve(&config)?;
            let range = DateRange::from_args(from.as_deref(), to.as_deref(), today, config.days)?;
            let path = output.unwrap_or_else(|| config.expanded_ics_path());
            commands::export::run(&calendar, &range, cycle, &path)
        }
        Commands::Config => commands::config::run(&config),
    }
}
