//! Configuration management and validation.
//!
//! Runtime configuration for the registry compiler: source endpoints, the
//! registry file location and marker, and the per-fetch timeout. Loaded in
//! layers: built-in defaults, then an optional TOML file, then CLI
//! overrides (applied by the command layer).

use crate::constants::{
    DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_OUTPUT_PATH, DEFAULT_PRIMARY_URL, DEFAULT_REGISTRY_MARKER,
    DEFAULT_SECONDARY_URL,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Global configuration for a registry compilation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed-width primary source endpoint (NOAA stations.txt)
    pub primary_url: String,

    /// CSV secondary source endpoint (OurAirports airports.csv)
    pub secondary_url: String,

    /// Registry file whose data section is rewritten
    pub output_path: PathBuf,

    /// Marker text identifying the line that opens the data section
    pub marker: String,

    /// Per-fetch timeout in seconds
    pub fetch_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            primary_url: DEFAULT_PRIMARY_URL.to_string(),
            secondary_url: DEFAULT_SECONDARY_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            marker: DEFAULT_REGISTRY_MARKER.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from an optional TOML file, falling back to
    /// defaults when no file is given.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }

    /// Parse configuration from a TOML file. Missing keys fall back to
    /// their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&text).map_err(|e| {
            Error::configuration(format!(
                "invalid config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Validate configuration consistency before a run.
    pub fn validate(&self) -> Result<()> {
        if self.fetch_timeout_secs == 0 {
            return Err(Error::configuration(
                "fetch timeout must be greater than 0 seconds",
            ));
        }
        if self.primary_url.trim().is_empty() {
            return Err(Error::configuration("primary source URL cannot be empty"));
        }
        if self.secondary_url.trim().is_empty() {
            return Err(Error::configuration("secondary source URL cannot be empty"));
        }
        if self.marker.is_empty() {
            return Err(Error::configuration("registry marker cannot be empty"));
        }
        Ok(())
    }

    /// Per-fetch timeout as a [`Duration`]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
