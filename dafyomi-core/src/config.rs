//! Global dafyomi configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ICS_PATH, DEFAULT_SCHEDULE_DAYS};
use crate::error::{DafYomiError, DafYomiResult};
use crate::schedule::{Cycle, CycleKind};
use crate::yerushalmi::Edition;

fn default_days() -> u32 {
    DEFAULT_SCHEDULE_DAYS
}

fn default_ics_path() -> PathBuf {
    PathBuf::from(DEFAULT_ICS_PATH)
}

/// Configuration at ~/.config/dafyomi/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DafYomiConfig {
    #[serde(default)]
    pub cycle: CycleKind,

    #[serde(default)]
    pub edition: Edition,

    #[serde(default = "default_days")]
    pub days: u32,

    #[serde(default = "default_ics_path")]
    pub ics_path: PathBuf,
}

impl Default for DafYomiConfig {
    fn default() -> Self {
        DafYomiConfig {
            cycle: CycleKind::default(),
            edition: Edition::default(),
            days: default_days(),
            ics_path: default_ics_path(),
        }
    }
}

impl DafYomiConfig {
    pub fn config_path() -> DafYomiResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DafYomiError::Config("Could not determine config directory".into()))?
            .join("dafyomi");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/dafyomi/config.toml, creating a commented default first.
    pub fn load() -> DafYomiResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> DafYomiResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| DafYomiError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DafYomiError::Config(e.to_string()))
    }

    /// The cycle selected by `cycle` and `edition`.
    pub fn default_cycle(&self) -> Cycle {
        Cycle::new(self.cycle, self.edition)
    }

    /// `ics_path` with `~` expanded.
    pub fn expanded_ics_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.ics_path.to_string_lossy()).into_owned())
    }

    pub fn save_to(&self, path: &Path) -> DafYomiResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| DafYomiError::Config(e.to_string()))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Save the current config to ~/.config/dafyomi/config.toml
    pub fn save(&self) -> DafYomiResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DafYomiResult<()> {
        let contents = format!(
            "\
# dafyomi configuration

# Cycle to follow: \"bavli\" or \"yerushalmi\"
# cycle = \"bavli\"

# Yerushalmi pagination: \"vilna\" or \"schottenstein\"
# edition = \"vilna\"

# Days shown by `dafyomi schedule` when no end date is given:
# days = {}

# Where `dafyomi export` writes:
# ics_path = \"{}\"
",
            DEFAULT_SCHEDULE_DAYS, DEFAULT_ICS_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        Ok(())
    }
}
