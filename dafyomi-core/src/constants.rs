/// Days listed or exported when no end date is given.
pub const DEFAULT_SCHEDULE_DAYS: u32 = 7;

/// Where `export` writes when no output path is given.
pub const DEFAULT_ICS_PATH: &str = "~/dafyomi.ics";
