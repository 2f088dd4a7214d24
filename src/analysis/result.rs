//! Analysis results as returned by the analysis service

use crate::error::{IntakeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// ATS compatibility score (0-100)
    pub ats_score: u8,

    /// Alignment with the job description (0-100)
    pub match_percentage: u8,

    pub breakdown: Vec<BreakdownEntry>,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub label: String,
    pub value: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub impact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    Add,
    Remove,
    Improve,
    Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

impl fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionType::Add => write!(f, "add"),
            SuggestionType::Remove => write!(f, "remove"),
            SuggestionType::Improve => write!(f, "improve"),
            SuggestionType::Format => write!(f, "format"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => ScoreBand::Excellent,
            70..=84 => ScoreBand::Good,
            _ => ScoreBand::NeedsWork,
        }
    }
}

impl AnalysisResult {
    /// Reject results that downstream display cannot represent
    pub fn validate(&self) -> Result<()> {
        if self.ats_score > 100 {
            return Err(IntakeError::AnalysisFailed(format!(
                "ATS score out of range: {}",
                self.ats_score
            )));
        }
        if self.match_percentage > 100 {
            return Err(IntakeError::AnalysisFailed(format!(
                "Match percentage out of range: {}",
                self.match_percentage
            )));
        }
        if let Some(entry) = self.breakdown.iter().find(|e| e.value > e.max) {
            return Err(IntakeError::AnalysisFailed(format!(
                "Breakdown '{}' has value {} above max {}",
                entry.label, entry.value, entry.max
            )));
        }
        Ok(())
    }

    pub fn ats_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.ats_score)
    }

    pub fn match_verdict(&self) -> &'static str {
        match self.match_percentage {
            80..=u8::MAX => {
                "Excellent match! Your resume aligns well with this job description."
            }
            60..=79 => "Good match with room for improvement. Consider the suggestions below.",
            _ => "Low match detected. Focus on high-priority improvements for better results.",
        }
    }

    /// Suggestions of one priority, in service order
    pub fn suggestions_with(&self, priority: Priority) -> Vec<&Suggestion> {
        self.suggestions
            .iter()
            .filter(|s| s.priority == priority)
            .collect()
    }

    /// Non-empty priority groups, high first
    pub fn grouped_suggestions(&self) -> Vec<(Priority, Vec<&Suggestion>)> {
        Priority::ALL
            .iter()
            .map(|p| (*p, self.suggestions_with(*p)))
            .filter(|(_, group)| !group.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(id: &str, priority: Priority) -> Suggestion {
        Suggestion {
            id: id.to_string(),
            kind: SuggestionType::Improve,
            priority,
            title: format!("Suggestion {}", id),
            description: String::new(),
            impact: "+1% ATS Score".to_string(),
            keywords: None,
        }
    }

    fn result(ats: u8, matched: u8) -> AnalysisResult {
        AnalysisResult {
            ats_score: ats,
            match_percentage: matched,
            breakdown: vec![BreakdownEntry {
                label: "Keywords Match".to_string(),
                value: 8,
                max: 10,
            }],
            suggestions: vec![
                suggestion("1", Priority::Low),
                suggestion("2", Priority::High),
                suggestion("3", Priority::Low),
            ],
        }
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(85), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(84), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(70), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(69), ScoreBand::NeedsWork);
    }

    #[test]
    fn test_grouping_keeps_service_order() {
        let result = result(78, 72);
        let groups = result.grouped_suggestions();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, Priority::High);
        let low_ids: Vec<&str> = groups[1].1.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(low_ids, vec!["1", "3"]);
    }

    #[test]
    fn test_validate_ranges() {
        assert!(result(78, 72).validate().is_ok());
        assert!(result(101, 72).validate().is_err());
        assert!(result(78, 150).validate().is_err());

        let mut over = result(78, 72);
        over.breakdown[0].value = 11;
        assert!(over.validate().is_err());
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(result(78, 72)).unwrap();
        assert_eq!(json["atsScore"], 78);
        assert_eq!(json["matchPercentage"], 72);
        assert_eq!(json["suggestions"][0]["type"], "improve");
        assert_eq!(json["suggestions"][0]["priority"], "low");
        assert!(json["suggestions"][0].get("keywords").is_none());
    }

    #[test]
    fn test_match_verdict_thresholds() {
        assert!(result(0, 80).match_verdict().starts_with("Excellent"));
        assert!(result(0, 60).match_verdict().starts_with("Good"));
        assert!(result(0, 59).match_verdict().starts_with("Low"));
    }
}
