use env_logger::{Builder, Env};

/// Default filter for a CLI verbosity level.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging. `RUST_LOG` overrides the CLI flag if set.
pub fn init(verbosity: u8) {
    Builder::from_env(Env::default().default_filter_or(level_for(verbosity)))
        .format_timestamp(None)
        .init();
}
