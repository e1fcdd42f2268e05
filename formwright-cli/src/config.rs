use anyhow::{Context, Result};
use formwright_engine::EngineConfig;
use formwright_submit::SubmitterConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings read from the optional TOML config file.
///
/// ```toml
/// db_path = "forms/intake.db"
///
/// [engine]
/// default_label = "Untitled"
///
/// [submit]
/// endpoint = "https://hooks.example.com/intake"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub engine: EngineConfig,
    pub submit: SubmitterConfig,
    pub db_path: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            submit: SubmitterConfig::default(),
            db_path: PathBuf::from("formwright.db"),
        }
    }
}

impl CliConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse config")
    }

    /// Reads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text)
    }
}
