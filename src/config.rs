//! Configuration file loading and parsing.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".cukescanrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob pattern for feature-file discovery, relative to `work_dir`.
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Base directory for discovery and relative record paths.
    #[serde(default = "default_work_dir")]
    pub work_dir: String,
}

fn default_pattern() -> String {
    "**/*.feature".to_string()
}

fn default_work_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            work_dir: default_work_dir(),
        }
    }
}

impl Config {
    /// Load the config file from `dir`, falling back to defaults when it
    /// does not exist.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        Pattern::new(&self.pattern)
            .with_context(|| format!("Invalid glob pattern in 'pattern': \"{}\"", self.pattern))?;
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let json = serde_json::to_string_pretty(&Config::default())?;
    Ok(json + "\n")
}
