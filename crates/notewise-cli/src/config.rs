//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use notewise_generator::GeneratorConfig;
use notewise_llm::ClientConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend connection settings
    #[serde(default)]
    pub client: ClientConfig,

    /// Generation tuning
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".notewise").join("config.toml"))
    }

    /// Load configuration from `path`, or defaults if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Copy of this configuration safe to print (API key masked).
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if let Some(key) = copy.client.api_key.as_mut() {
            let visible: String = key.chars().take(4).collect();
            *key = format!("{}…", visible);
        }
        copy
    }

    /// Validate client and generator sections.
    pub fn validate(&self) -> Result<()> {
        self.client
            .validate()
            .map_err(|e| CliError::Config(format!("[client] {}", e)))?;
        self.generator
            .validate()
            .map_err(|e| CliError::Config(format!("[generator] {}", e)))?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}
