//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default lifetime of a status bar message
const DEFAULT_STATUS_TIMEOUT_SECS: u64 = 3;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "registration", "registration-tui")
}

/// Directory the log file is written to
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
}

/// One entry of the country select
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryOption {
    /// Value stored in the form
    pub value: String,
    /// Text shown in the select
    pub label: String,
}

impl CountryOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Countries offered when the config does not list any
pub fn default_country_options() -> Vec<CountryOption> {
    vec![
        CountryOption::new("colombia", "Colombia"),
        CountryOption::new("mexico", "México"),
        CountryOption::new("argentina", "Argentina"),
        CountryOption::new("chile", "Chile"),
        CountryOption::new("peru", "Perú"),
    ]
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Options for the country select
    pub country_options: Option<Vec<CountryOption>>,
    /// Start with the password field unmasked
    pub reveal_password: Option<bool>,
    /// Seconds a status message stays visible
    pub status_timeout_secs: Option<u64>,
    /// Draw the error summary above the form
    pub show_error_summary: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn country_options(&self) -> Vec<CountryOption> {
        self.country_options
            .clone()
            .unwrap_or_else(default_country_options)
    }

    pub fn reveal_password(&self) -> bool {
        self.reveal_password.unwrap_or(false)
    }

    pub fn status_timeout(&self) -> Duration {
        Duration::from_secs(
            self.status_timeout_secs
                .unwrap_or(DEFAULT_STATUS_TIMEOUT_SECS),
        )
    }

    pub fn show_error_summary(&self) -> bool {
        self.show_error_summary.unwrap_or(true)
    }
}
