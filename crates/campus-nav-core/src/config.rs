//! Configuration for campus-nav
//!
//! Read from `--config <path>` when given, otherwise from
//! `$CAMPUS_NAV_CONFIG_DIR/config.toml` or `~/.config/campus-nav/config.toml`.
//! A missing default file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{NavError, Result};
use crate::graph::SearchOptions;

pub use types::{NavConfig, MAX_PRECISION};

const CONFIG_DIR: &str = "campus-nav";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "CAMPUS_NAV_CONFIG_DIR";

impl NavConfig {
    /// Default config file location
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| NavError::Other("unable to determine config directory".to_string()))?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file.
    ///
    /// A relative `map` path is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            NavError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let mut config: NavConfig = toml::from_str(&content)?;

        if let (Some(map), Some(dir)) = (config.map.as_mut(), path.parent()) {
            if map.is_relative() {
                *map = dir.join(&*map);
            }
        }

        config.validate()?;
        tracing::debug!(path = %path.display(), "load_config");
        Ok(config)
    }

    /// Load from `explicit` if given, else from the default location if it exists
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            bail_invalid!("precision", self.precision);
        }
        if self.unit.trim().is_empty() {
            bail_invalid!("unit", "(empty)");
        }
        Ok(())
    }

    /// Search options derived from this configuration
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            neighbor_order: self.neighbor_order,
        }
    }
}
