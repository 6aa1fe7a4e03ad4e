//! Application settings.
//!
//! Settings come from an optional TOML file (`config.toml` by default, or the
//! path in `EMPLOYEES_CONFIG`) with environment variables layered on top. A
//! missing file means defaults; a malformed one is a configuration error.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime settings for the HTTP service and startup seeding
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Socket address the HTTP server binds to
    pub bind_address: String,
    /// Seed file handed to the loader registry at startup
    pub seed_path: PathBuf,
    /// Whether to load `seed_path` at startup
    pub seed_on_startup: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            seed_path: PathBuf::from("initial/employees.json"),
            seed_on_startup: true,
        }
    }
}

impl Settings {
    /// Parses settings from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse settings: {e}"),
        })
    }

    /// Reads settings from `path`, falling back to defaults when the file is absent.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("Failed to read settings file {path:?}: {e}"),
        })?;
        Self::from_toml(&contents)
    }

    /// Applies `BIND_ADDRESS` and `SEED_PATH` overrides using `lookup`.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind_address) = lookup("BIND_ADDRESS") {
            self.bind_address = bind_address;
        }
        if let Some(seed_path) = lookup("SEED_PATH") {
            self.seed_path = PathBuf::from(seed_path);
        }
        self
    }

    /// Loads settings the way the binary does: file then process environment.
    pub fn load() -> Result<Self> {
        let path = std::env::var("EMPLOYEES_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        let settings = Self::from_file(&path)?.with_overrides(|key| std::env::var(key).ok());
        info!(
            "Settings loaded: bind_address={}, seed_path={:?}, seed_on_startup={}",
            settings.bind_address, settings.seed_path, settings.seed_on_startup
        );
        Ok(settings)
    }
}
