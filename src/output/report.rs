//! Report wrapper around an analysis result

use crate::analysis::AnalysisResult;
use crate::selection::SelectionState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Version of the tool that produced the report
    pub tool_version: String,

    /// Resume as shown to the user
    pub resume: String,

    /// Job description as shown to the user
    pub job_description: String,
}

impl AnalysisReport {
    pub fn new(
        result: AnalysisResult,
        resume: impl Into<String>,
        job_description: impl Into<String>,
    ) -> Self {
        Self {
            result,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                resume: resume.into(),
                job_description: job_description.into(),
            },
        }
    }

    pub fn from_selection(result: AnalysisResult, selection: &SelectionState) -> Self {
        let name = |doc: Option<&crate::input::Document>| {
            doc.map(|d| d.display_name()).unwrap_or_else(|| "none".to_string())
        };
        Self::new(result, name(selection.resume()), name(selection.job_description()))
    }
}
