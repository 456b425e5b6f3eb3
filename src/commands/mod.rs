pub mod config;
pub mod daf;
pub mod export;
pub mod schedule;
