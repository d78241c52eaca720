//! User configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::error::{TimetableError, TimetableResult};
use crate::persist::LoadPolicy;
use crate::weekday::WeekStart;

/// Configuration at ~/.config/timetable/config.toml
///
/// Every key is optional; a missing key takes its default.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct TimetableConfig {
    #[serde(default)]
    pub week_start: WeekStart,

    /// File used when a save/load prompt is left empty. `~` is expanded.
    #[serde(default)]
    pub default_file: Option<PathBuf>,

    #[serde(default)]
    pub load_policy: LoadPolicy,
}

impl TimetableConfig {
    pub fn config_path() -> TimetableResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TimetableError::Config("Could not determine config directory".into()))?
            .join("timetable");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented-out template
    /// there first if nothing exists yet.
    pub fn load() -> TimetableResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path`, which must exist.
    pub fn load_from(path: &Path) -> TimetableResult<Self> {
        let config = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(true))
            .build()
            .map_err(|e| TimetableError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TimetableError::Config(e.to_string()))?;

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> TimetableResult<()> {
        let contents = "\
# timetable configuration

# Day the week starts on when printing and saving (\"monday\" or \"sunday\"):
# week_start = \"monday\"

# File used when the save/load prompt is left empty:
# default_file = \"~/timetable.txt\"

# What loading does with a malformed line (\"abort\" or \"skip\"):
# load_policy = \"abort\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TimetableError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| TimetableError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// `default_file` with `~` expanded.
    pub fn default_file(&self) -> Option<PathBuf> {
        self.default_file.as_ref().map(|p| {
            PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).into_owned())
        })
    }
}
