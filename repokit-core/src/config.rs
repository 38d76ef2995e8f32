//! Optional YAML configuration.
//!
//! # Lookup order
//!
//! 1. An explicit path (`--config`): must exist.
//! 2. `<config_dir>/repokit/config.yaml`: used only if present.
//! 3. Built-in defaults.
//!
//! # API pattern
//!
//! [`Config::discover_at`] takes the config directory explicitly so tests can
//! point it at a `TempDir`; [`Config::discover`] derives it from
//! `dirs::config_dir()`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::LicenseId;

/// Raw-text host serving one plain-text file per SPDX identifier.
pub const DEFAULT_LICENSE_BASE_URL: &str =
    "https://raw.githubusercontent.com/spdx/license-list-data/main/text/";

/// Human-readable catalog of valid license identifiers.
pub const DEFAULT_LICENSE_CATALOG_URL: &str = "https://spdx.org/licenses/";

/// Runtime configuration. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL the license identifier is appended to.
    pub license_base_url: String,
    /// Catalog suggested to the user when a license lookup fails.
    pub license_catalog_url: String,
    /// License used when none is given on the command line.
    pub default_license: LicenseId,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            license_base_url: DEFAULT_LICENSE_BASE_URL.to_string(),
            license_catalog_url: DEFAULT_LICENSE_CATALOG_URL.to_string(),
            default_license: LicenseId::default(),
        }
    }
}

impl Config {
    /// `<config_dir>/repokit/config.yaml`: pure, no I/O.
    pub fn default_path_at(config_dir: &Path) -> PathBuf {
        config_dir.join("repokit").join("config.yaml")
    }

    /// Load a config file that must exist.
    ///
    /// Returns `ConfigError::NotFound` if absent,
    /// `ConfigError::Parse` (with path + line context) if malformed YAML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        // An empty file is a valid "all defaults" config.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `<config_dir>/repokit/config.yaml` if present, otherwise defaults.
    pub fn discover_at(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::default_path_at(config_dir);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// `discover_at` convenience wrapper; defaults when the platform has no
    /// config directory.
    pub fn discover() -> Result<Self, ConfigError> {
        match dirs::config_dir() {
            Some(dir) => Self::discover_at(&dir),
            None => Ok(Self::default()),
        }
    }

    /// Resolve the effective config: explicit path first, then discovery.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::discover(),
        }
    }
}
