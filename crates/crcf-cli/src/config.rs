//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config FILE`, or the default location if present)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for generation flags.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// Flag defaults applied when the corresponding CLI flag is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub typescript: bool,
    pub uppercase: bool,
    pub functional: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from `config_file` if given, otherwise from the
    /// default location if it exists, otherwise built-in defaults.
    ///
    /// A `--config` path that does not exist or fails to parse is an error;
    /// a missing *default* config file is not.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::config_path();
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read config file {}: {e}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| anyhow::anyhow!("cannot parse config file {}: {e}", path.display()))?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.crcf.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "crcf", "crcf")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".crcf.toml"))
    }
}
