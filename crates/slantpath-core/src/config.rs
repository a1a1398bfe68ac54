//! # Configuration System
//!
//! Provides YAML-based configuration for the slantpath tools, covering
//! the default ground station, link parameters, and output behavior.
//! Command-line flags override configuration values; configuration
//! values override the built-in defaults.
//!
//! ## Configuration Search Path
//!
//! Configuration is loaded from the first file found:
//! 1. Path specified via `SLANTPATH_CONFIG` environment variable
//! 2. `./slantpath.yaml` (current directory)
//! 3. `~/.config/slantpath/config.yaml` (user config)
//! 4. `/etc/slantpath/config.yaml` (system config)
//!
//! ## Example Configuration
//!
//! ```yaml
//! station:
//!   name: "BlacksburgVA"
//!   lat_deg: 37.206831
//!   lon_deg: -80.419138
//!
//! link:
//!   frequency_hz: 1.57542e9
//!   antenna_diameter_m: 0.1
//!
//! output:
//!   dir: "./output"
//!   save: true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::scenario::{GroundStation, Scenario};

/// Error type for configuration operations.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Configuration file not found
    NotFound(String),
    /// Failed to read configuration file
    ReadError(String),
    /// Failed to parse configuration
    ParseError(String),
    /// Invalid configuration value
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(msg) => write!(f, "config not found: {}", msg),
            ConfigError::ReadError(msg) => write!(f, "failed to read config: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "failed to parse config: {}", msg),
            ConfigError::ValidationError(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Link parameter defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Carrier frequency in Hz
    pub frequency_hz: f64,
    /// Receive antenna diameter in meters
    pub antenna_diameter_m: f64,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            frequency_hz: 1_575_420_000.0,
            antenna_diameter_m: 0.1,
        }
    }
}

/// Chart and report output defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory for charts and exports
    pub dir: String,
    /// Save charts to disk
    pub save: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "./output".to_string(),
            save: true,
        }
    }
}

/// Complete slantpath configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlantpathConfig {
    /// Default ground station
    pub station: GroundStation,
    /// Default link parameters
    pub link: LinkConfig,
    /// Output behavior
    pub output: OutputConfig,
}

impl Default for SlantpathConfig {
    fn default() -> Self {
        Self {
            station: GroundStation::default(),
            link: LinkConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl SlantpathConfig {
    /// Load configuration from the default search path.
    ///
    /// Search order:
    /// 1. `SLANTPATH_CONFIG` environment variable
    /// 2. `./slantpath.yaml`
    /// 3. `~/.config/slantpath/config.yaml`
    /// 4. `/etc/slantpath/config.yaml`
    ///
    /// Returns default config if no file is found.
    pub fn load() -> Result<Self, ConfigError> {
        // Check environment variable first
        if let Ok(path) = std::env::var("SLANTPATH_CONFIG") {
            if Path::new(&path).exists() {
                return Self::load_from(Path::new(&path));
            }
        }

        // Check standard paths
        let paths = Self::config_search_paths();
        for path in &paths {
            if path.exists() {
                return Self::load_from(path);
            }
        }

        // No config found, return defaults
        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))
    }

    /// Get configuration search paths.
    pub fn config_search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("./slantpath.yaml")];

        // User config directory
        if let Some(config_dir) = directories::ProjectDirs::from("", "", "slantpath") {
            paths.push(config_dir.config_dir().join("config.yaml"));
        }

        // System config
        paths.push(PathBuf::from("/etc/slantpath/config.yaml"));

        paths
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scenario()
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        if self.output.dir.is_empty() {
            return Err(ConfigError::ValidationError(
                "output.dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the [`Scenario`] described by this configuration.
    ///
    /// Frequency is stored in Hz for CLI symmetry and converted to GHz
    /// here.
    pub fn scenario(&self) -> Scenario {
        Scenario::new(
            self.station.clone(),
            self.link.frequency_hz / 1e9,
            self.link.antenna_diameter_m,
        )
    }
}
