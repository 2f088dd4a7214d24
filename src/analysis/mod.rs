//! Hand-off to the external analysis service and the results it returns

pub mod result;
pub mod service;

pub use result::{AnalysisResult, BreakdownEntry, Priority, ScoreBand, Suggestion, SuggestionType};
pub use service::{AnalysisClient, AnalysisService, MockAnalysisService};
