//! Configuration System
//!
//! Settings for the tool itself (where the project keeps its data and
//! artifacts, how the watcher debounces and which commands it launches, and
//! logging). Not to be confused with the guild configuration the tool
//! resolves, which lives in [`crate::guild`].

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root tool configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Project paths, relative to the project root
    #[serde(default)]
    pub paths: PathsConfig,

    /// Watcher settings
    #[serde(default)]
    pub watch: WatchSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Project paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    #[serde(default = "default_user_config")]
    pub user_config: PathBuf,

    #[serde(default = "default_artifact")]
    pub artifact: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_user_config() -> PathBuf {
    PathBuf::from("data/guild-config.json")
}

fn default_artifact() -> PathBuf {
    PathBuf::from("src/config/guild.json")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            public_dir: default_public_dir(),
            user_config: default_user_config(),
            artifact: default_artifact(),
        }
    }
}

/// Watcher settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchSettings {
    /// Debounce window in milliseconds, per category
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Command (program and arguments) that converts CSV data
    #[serde(default = "default_convert_command")]
    pub convert_command: Vec<String>,

    /// Command that resolves the guild configuration.
    /// Empty means this binary's own `resolve` subcommand.
    #[serde(default)]
    pub resolve_command: Vec<String>,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_convert_command() -> Vec<String> {
    vec!["npm".to_string(), "run".to_string(), "convert-csv".to_string()]
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            convert_command: default_convert_command(),
            resolve_command: Vec::new(),
        }
    }
}

impl WatchSettings {
    /// Validate watcher settings
    pub fn validate(&self) -> Result<(), String> {
        if self.debounce_ms == 0 {
            return Err("debounce_ms must be greater than zero".to_string());
        }
        if self.convert_command.first().map_or(true, |p| p.trim().is_empty()) {
            return Err("convert_command must name a program".to_string());
        }
        if self.resolve_command.first().is_some_and(|p| p.trim().is_empty()) {
            return Err("resolve_command must name a program when set".to_string());
        }
        Ok(())
    }
}
