//! Analysis service boundary, the built-in mock, and the retrying client

use crate::analysis::result::{AnalysisResult, BreakdownEntry, Priority, Suggestion, SuggestionType};
use crate::config::AnalysisConfig;
use crate::error::{IntakeError, Result};
use crate::input::Document;
use crate::notifier::Notification;
use crate::session::IntakeSession;
use log::{debug, info, warn};
use std::time::Duration;

pub trait AnalysisService {
    fn analyze(
        &self,
        resume: &Document,
        job: &Document,
    ) -> impl std::future::Future<Output = Result<AnalysisResult>> + Send;
}

/// Stands in for the real service: waits, then returns a fixed result.
pub struct MockAnalysisService {
    delay: Duration,
}

impl MockAnalysisService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl AnalysisService for MockAnalysisService {
    async fn analyze(&self, resume: &Document, job: &Document) -> Result<AnalysisResult> {
        debug!(
            "Mock analysis of {} against {} ({}ms delay)",
            resume.display_name(),
            job.display_name(),
            self.delay.as_millis()
        );
        tokio::time::sleep(self.delay).await;
        Ok(sample_result())
    }
}

fn breakdown(label: &str, value: u32) -> BreakdownEntry {
    BreakdownEntry {
        label: label.to_string(),
        value,
        max: 10,
    }
}

fn suggestion(
    id: &str,
    kind: SuggestionType,
    priority: Priority,
    title: &str,
    description: &str,
    impact: &str,
    keywords: &[&str],
) -> Suggestion {
    Suggestion {
        id: id.to_string(),
        kind,
        priority,
        title: title.to_string(),
        description: description.to_string(),
        impact: impact.to_string(),
        keywords: if keywords.is_empty() {
            None
        } else {
            Some(keywords.iter().map(|k| k.to_string()).collect())
        },
    }
}

/// The canned result the mock service returns
pub fn sample_result() -> AnalysisResult {
    AnalysisResult {
        ats_score: 78,
        match_percentage: 72,
        breakdown: vec![
            breakdown("Keywords Match", 8),
            breakdown("Skills Alignment", 7),
            breakdown("Experience Relevance", 8),
            breakdown("Format & Structure", 9),
        ],
        suggestions: vec![
            suggestion(
                "1",
                SuggestionType::Add,
                Priority::High,
                "Add Missing Keywords",
                "Include these high-impact keywords from the job description to improve ATS compatibility.",
                "+12% ATS Score",
                &["React", "TypeScript", "Node.js", "AWS", "Microservices"],
            ),
            suggestion(
                "2",
                SuggestionType::Improve,
                Priority::High,
                "Quantify Achievements",
                "Add specific metrics and numbers to your accomplishments to demonstrate impact.",
                "+8% Match Score",
                &["Revenue growth", "Team leadership", "Performance metrics"],
            ),
            suggestion(
                "3",
                SuggestionType::Format,
                Priority::Medium,
                "Optimize Section Headers",
                "Use standard section names that ATS systems easily recognize.",
                "+5% ATS Score",
                &[],
            ),
            suggestion(
                "4",
                SuggestionType::Add,
                Priority::Medium,
                "Technical Skills Section",
                "Create a dedicated technical skills section with relevant technologies.",
                "+6% Match Score",
                &["JavaScript", "Python", "Docker", "Git"],
            ),
            suggestion(
                "5",
                SuggestionType::Improve,
                Priority::Low,
                "Professional Summary",
                "Enhance your summary to better align with the job requirements.",
                "+3% Match Score",
                &[],
            ),
        ],
    }
}

/// Upper bound on a single wait between attempts
pub const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// Calls a service with a per-attempt timeout and exponential backoff
/// between attempts. A result that fails validation is not retried.
pub struct AnalysisClient<S> {
    service: S,
    timeout: Duration,
    max_retries: u32,
    backoff: Duration,
}

impl<S: AnalysisService> AnalysisClient<S> {
    pub fn new(service: S, config: &AnalysisConfig) -> Self {
        Self {
            service,
            timeout: Duration::from_millis(config.timeout_ms),
            max_retries: config.max_retries,
            backoff: Duration::from_millis(config.retry_backoff_ms),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Wait before retry number `attempt` (1-based), doubling each time.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 1u32 << attempt.saturating_sub(1).min(16);
        self.backoff
            .checked_mul(factor)
            .unwrap_or(MAX_BACKOFF)
            .min(MAX_BACKOFF)
    }

    pub async fn analyze(&self, resume: &Document, job: &Document) -> Result<AnalysisResult> {
        let mut last_error: Option<IntakeError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.backoff_delay(attempt);
                warn!(
                    "Analysis attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            match tokio::time::timeout(self.timeout, self.service.analyze(resume, job)).await {
                Ok(Ok(result)) => {
                    result.validate()?;
                    info!(
                        "Analysis finished: ATS score {}, match {}%",
                        result.ats_score, result.match_percentage
                    );
                    return Ok(result);
                }
                Ok(Err(e)) => {
                    debug!("Analysis attempt {} error: {}", attempt + 1, e);
                    last_error = Some(e);
                }
                Err(_) => {
                    debug!("Analysis attempt {} timed out", attempt + 1);
                    last_error =
                        Some(IntakeError::AnalysisTimeout(self.timeout.as_millis() as u64));
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| IntakeError::AnalysisFailed("no attempts were made".to_string())))
    }

    /// Analyze whatever the session currently holds, notifying the outcome.
    pub async fn analyze_selection(&self, session: &IntakeSession) -> Result<AnalysisResult> {
        let Some((resume, job)) = session.selection().pair() else {
            session.notifier().notify(Notification::missing_inputs());
            return Err(IntakeError::MissingInputs(
                "both a resume and a job description are required".to_string(),
            ));
        };

        match self.analyze(resume, job).await {
            Ok(result) => {
                session.notifier().notify(Notification::analysis_complete());
                Ok(result)
            }
            Err(e) => {
                session.notifier().notify(Notification::analysis_failed(&e.to_string()));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Normalizer;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct FlakyService {
        failures: u32,
        calls: AtomicU32,
    }

    impl AnalysisService for FlakyService {
        async fn analyze(&self, _resume: &Document, _job: &Document) -> Result<AnalysisResult> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                Err(IntakeError::AnalysisFailed(format!("upstream error {}", call)))
            } else {
                Ok(sample_result())
            }
        }
    }

    fn quick_config(max_retries: u32) -> AnalysisConfig {
        AnalysisConfig {
            mock_delay_ms: 0,
            timeout_ms: 1000,
            max_retries,
            retry_backoff_ms: 1,
        }
    }

    fn docs() -> (Document, Document) {
        let normalizer = Normalizer::default();
        (
            normalizer.validate_text("Jane Doe, Rust engineer").unwrap().into(),
            normalizer.validate_text("Hiring a Rust engineer").unwrap().into(),
        )
    }

    #[test]
    fn test_sample_result_is_valid() {
        let result = sample_result();
        assert!(result.validate().is_ok());
        assert_eq!(result.suggestions.len(), 5);
        assert_eq!(result.breakdown.len(), 4);
    }

    #[tokio::test]
    async fn test_mock_service_returns_sample() {
        let (resume, job) = docs();
        let service = MockAnalysisService::new(Duration::from_millis(0));
        let result = service.analyze(&resume, &job).await.unwrap();
        assert_eq!(result, sample_result());
    }

    #[tokio::test]
    async fn test_retries_until_success() {
        let (resume, job) = docs();
        let service = FlakyService { failures: 2, calls: AtomicU32::new(0) };
        let client = AnalysisClient::new(service, &quick_config(2));

        let result = client.analyze(&resume, &job).await.unwrap();
        assert_eq!(result.ats_score, 78);
        assert_eq!(client.service().calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let (resume, job) = docs();
        let service = FlakyService { failures: 10, calls: AtomicU32::new(0) };
        let client = AnalysisClient::new(service, &quick_config(1));

        let err = client.analyze(&resume, &job).await.unwrap_err();
        assert!(matches!(err, IntakeError::AnalysisFailed(_)));
        assert_eq!(client.service().calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_backoff_doubles_and_is_capped() {
        let service = MockAnalysisService::new(Duration::ZERO);
        let client = AnalysisClient::new(service, &quick_config(3));
        assert_eq!(client.backoff_delay(1), Duration::from_millis(1));
        assert_eq!(client.backoff_delay(3), Duration::from_millis(4));

        let config = AnalysisConfig {
            retry_backoff_ms: u64::MAX,
            ..quick_config(20)
        };
        let client = AnalysisClient::new(MockAnalysisService::new(Duration::ZERO), &config);
        assert_eq!(client.backoff_delay(1), MAX_BACKOFF);
        assert_eq!(client.backoff_delay(20), MAX_BACKOFF);
    }

    #[tokio::test]
    async fn test_slow_service_times_out() {
        let (resume, job) = docs();
        let config = AnalysisConfig {
            timeout_ms: 10,
            ..quick_config(0)
        };
        let client = AnalysisClient::new(MockAnalysisService::new(Duration::from_secs(5)), &config);

        let err = client.analyze(&resume, &job).await.unwrap_err();
        assert!(matches!(err, IntakeError::AnalysisTimeout(10)));
    }
}
