//! Calculator preferences
//!
//! Stored as JSON under the platform config directory. A missing or broken
//! file is never fatal: the calculator starts with defaults.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "POWERCALC_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config not found: {0}")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// What `x / 0` evaluates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroDivision {
    /// The result is `0`, indistinguishable from a real zero.
    #[default]
    Zero,
    /// The display shows "Error" and the state is left alone.
    Error,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalcConfig {
    #[serde(default)]
    pub zero_division: ZeroDivision,
    /// Extra directory searched first for the custom fonts.
    #[serde(default)]
    pub font_dir: Option<PathBuf>,
}

impl CalcConfig {
    /// Path of the config file, honouring `POWERCALC_CONFIG`.
    pub fn path() -> PathBuf {
        Self::path_or_default(std::env::var_os(CONFIG_ENV))
    }

    fn path_or_default(override_path: Option<OsString>) -> PathBuf {
        override_path
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| config_dir("powercalc").join("config.json"))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_or_default(&Self::path())
    }

    /// Load from `path`; a missing or broken file gives the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => {
                log::debug!("loaded config from {}", path.display());
                config
            }
            Err(ConfigError::NotFound(_)) => Self::default(),
            Err(e) => {
                log::warn!("ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Get the config directory for an app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("org", "powercalc", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
