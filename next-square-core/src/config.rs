//! Driver configuration
//!
//! Settings are read from a TOML file. Missing fields fall back to the
//! defaults, which reproduce the classic sample run over `1, 2, 3, 4`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// How each driver result is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare number per line, `-1` for any failure
    #[default]
    Legacy,
    /// `input -> result` per line
    Text,
    /// One JSON object per line
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Legacy => "legacy",
            Self::Text => "text",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{}' (expected legacy, text or json)", other)),
        }
    }
}

/// Configuration for the sample driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Inputs evaluated in order
    pub inputs: Vec<i64>,

    /// Output format
    pub format: OutputFormat,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self { inputs: vec![1, 2, 3, 4], format: OutputFormat::Legacy }
    }
}

impl DriverConfig {
    /// Load from an explicit path, the default path if it exists, or defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let default_path = Self::default_config_path();
        if default_path.exists() {
            Self::from_file(&default_path)
        } else {
            debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        debug!("Loaded driver config from {:?}", path);
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize driver config")?;

        fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    pub fn default_config_path() -> PathBuf {
        PathBuf::from(".next-square/config.toml")
    }
}
