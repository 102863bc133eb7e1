use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Weekday};
use serde::Deserialize;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "birthday-picker.toml";

/// Top-level configuration. Every field is optional; CLI flags win.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PickerConfig {
    /// Birth date used when a command is not given one.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,

    /// Fixed "today", mainly for reproducible output.
    #[serde(default)]
    pub today: Option<NaiveDate>,

    /// First column of the calendar grid.
    #[serde(default)]
    pub week_start: WeekStart,

    /// Directory the SVG cards are written to.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
    Saturday,
}

impl From<WeekStart> for Weekday {
    fn from(value: WeekStart) -> Self {
        match value {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Saturday => Weekday::Sat,
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(".")
}

impl PickerConfig {
    /// Loads `path`, or falls back to defaults when no explicit path was
    /// given and the default file does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_PATH), false),
        };

        if !explicit && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self {
                out_dir: default_out_dir(),
                ..Self::default()
            });
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
