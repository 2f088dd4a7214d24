//! Error handling for the resume intake application

use crate::input::RejectionReason;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input rejected: {0}")]
    Rejected(RejectionReason),

    #[error("Missing inputs: {0}")]
    MissingInputs(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Analysis timed out after {0}ms")]
    AnalysisTimeout(u64),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, IntakeError>;

impl From<RejectionReason> for IntakeError {
    fn from(reason: RejectionReason) -> Self {
        IntakeError::Rejected(reason)
    }
}

impl From<toml::de::Error> for IntakeError {
    fn from(err: toml::de::Error) -> Self {
        IntakeError::Configuration(format!("Failed to parse config: {}", err))
    }
}

impl From<toml::ser::Error> for IntakeError {
    fn from(err: toml::ser::Error) -> Self {
        IntakeError::Configuration(format!("Failed to serialize config: {}", err))
    }
}
