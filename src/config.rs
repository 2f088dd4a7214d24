//! Configuration management for resume intake

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub intake: IntakeConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Declared MIME types that are accepted on their own
    pub accepted_mime_types: Vec<String>,
    /// Filename suffixes that are accepted on their own, matched case-sensitively
    pub accepted_extensions: Vec<String>,
    /// Optional upper bound on file size. Unset means no limit.
    pub max_size_bytes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub mock_delay_ms: u64,
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub retry_backoff_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TEXT_MIME: &str = "text/plain";

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            accepted_mime_types: vec![
                PDF_MIME.to_string(),
                DOCX_MIME.to_string(),
                TEXT_MIME.to_string(),
            ],
            accepted_extensions: vec![
                ".pdf".to_string(),
                ".docx".to_string(),
                ".txt".to_string(),
            ],
            max_size_bytes: None,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            mock_delay_ms: 2000,
            timeout_ms: 30_000,
            max_retries: 2,
            retry_backoff_ms: 500,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            intake: IntakeConfig::default(),
            analysis: AnalysisConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first use.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            log::debug!("Loaded configuration from {}", path.display());
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            log::info!("Wrote default configuration to {}", path.display());
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-intake")
            .join("config.toml")
    }

    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.analysis.mock_delay_ms)
    }
}
