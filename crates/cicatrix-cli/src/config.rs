//! Configuration management for the Cicatrix CLI.

use anyhow::{Context, Result};
use cicatrix::prelude::ScenarioConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "cicatrix.toml";

/// Cicatrix project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scenario: ScenarioConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Show a progress bar while stepping.
    #[serde(default = "default_progress")]
    pub progress: bool,
    /// Report a summary line every this many steps when verbose; 0 disables it.
    #[serde(default = "default_report_every")]
    pub report_every: u64,
}

fn default_progress() -> bool { true }
fn default_report_every() -> u64 { 100 }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            progress: default_progress(),
            report_every: default_report_every(),
        }
    }
}

impl Config {
    /// Load config from `path`, or from cicatrix.toml in the current or
    /// parent directories. Falls back to defaults when neither exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let found = match path {
            Some(path) => Some(path.to_path_buf()),
            None => std::env::current_dir()
                .ok()
                .and_then(|dir| find_config_file(&dir)),
        };
        match found {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config
            .scenario
            .validate()
            .with_context(|| format!("Invalid scenario in {}", path.display()))?;
        Ok(config)
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// Find cicatrix.toml in `start` or its parent directories.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
