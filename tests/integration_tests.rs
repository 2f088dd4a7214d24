//! Integration tests for resume intake

use resume_intake::analysis::{AnalysisClient, MockAnalysisService};
use resume_intake::config::{AnalysisConfig, Config};
use resume_intake::input::{FileCandidate, Normalizer, RejectionReason, Role};
use resume_intake::notifier::{MemoryNotifier, Severity};
use resume_intake::output::{AnalysisReport, ReportGenerator};
use resume_intake::session::{IgnoreReason, IntakeEvent, IntakeSession};
use resume_intake::IntakeError;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

fn session() -> (IntakeSession, Arc<MemoryNotifier>) {
    let notifier = Arc::new(MemoryNotifier::new());
    let session = IntakeSession::new(Normalizer::default(), notifier.clone());
    (session, notifier)
}

fn fixture(name: &str, mime: Option<&str>) -> FileCandidate {
    FileCandidate::from_path(&Path::new("tests/fixtures").join(name), mime).unwrap()
}

fn fast_client() -> AnalysisClient<MockAnalysisService> {
    let config = AnalysisConfig {
        mock_delay_ms: 0,
        ..AnalysisConfig::default()
    };
    AnalysisClient::new(MockAnalysisService::new(Duration::from_millis(0)), &config)
}

#[test]
fn test_docx_without_mime_is_accepted() {
    let (mut session, notifier) = session();
    let event = session.pick_file(Role::Resume, Some(fixture("resume.docx", None)));

    assert_eq!(event, IntakeEvent::Accepted);
    assert_eq!(notifier.last().unwrap().severity, Severity::Success);
}

#[test]
fn test_markdown_is_rejected() {
    let (mut session, notifier) = session();
    let event = session.pick_file(Role::Resume, Some(fixture("notes.md", Some("text/markdown"))));

    assert_eq!(
        event,
        IntakeEvent::Rejected(RejectionReason::UnsupportedType { name: "notes.md".to_string() })
    );
    assert!(session.selection().resume().is_none());
    let last = notifier.last().unwrap();
    assert_eq!(last.severity, Severity::Error);
    assert!(last.description.contains("notes.md"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = FileCandidate::from_path(Path::new("tests/fixtures/nonexistent.txt"), None);
    assert!(matches!(result, Err(IntakeError::Io(_))));
}

#[test]
fn test_directory_is_not_a_candidate() {
    let result = FileCandidate::from_path(Path::new("tests/fixtures"), None);
    assert!(matches!(result, Err(IntakeError::InvalidInput(_))));
}

#[test]
fn test_whitespace_job_text_cannot_be_submitted() {
    let (mut session, _) = session();
    session.pick_file(Role::Resume, Some(fixture("sample_resume.txt", Some("text/plain"))));

    let event = session.submit_text(Role::JobDescription, "   ");
    assert_eq!(event, IntakeEvent::Ignored(IgnoreReason::BlankDraft));
    assert!(!session.can_analyze());

    let err = event.into_result().unwrap_err();
    assert!(matches!(err, IntakeError::Rejected(RejectionReason::EmptyText)));
}

#[test]
fn test_clear_after_both_selected() {
    let (mut session, _) = session();
    session.pick_file(Role::Resume, Some(fixture("sample_resume.txt", None)));
    session.pick_file(Role::JobDescription, Some(fixture("job_description.txt", None)));
    assert!(session.can_analyze());

    session.clear(Role::Resume);
    assert!(!session.can_analyze());
    assert!(session.selection().job_description().is_some());
}

#[tokio::test]
async fn test_full_flow_with_mock_service() {
    let (mut session, notifier) = session();
    session.pick_file(Role::Resume, Some(fixture("resume.docx", None)));
    session.submit_text(Role::JobDescription, "Senior engineer with React and AWS experience");

    let result = fast_client().analyze_selection(&session).await.unwrap();
    assert_eq!(result.ats_score, 78);
    assert_eq!(result.match_percentage, 72);
    assert_eq!(notifier.last().unwrap().title, "Analysis complete!");

    let report = AnalysisReport::from_selection(result, session.selection());
    assert_eq!(report.metadata.resume, "resume.docx");

    let json = ReportGenerator::with_options(false, false, false)
        .generate_report(&report, resume_intake::config::OutputFormat::Json)
        .unwrap();
    assert!(json.contains("\"atsScore\":78"));
}

#[tokio::test]
async fn test_analysis_refused_without_both_roles() {
    let (mut session, notifier) = session();
    session.pick_file(Role::Resume, Some(fixture("sample_resume.txt", None)));

    let err = fast_client().analyze_selection(&session).await.unwrap_err();
    assert!(matches!(err, IntakeError::MissingInputs(_)));

    let last = notifier.last().unwrap();
    assert_eq!(last.title, "Missing files");
    assert_eq!(last.severity, Severity::Error);
}

#[test]
fn test_size_limit_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.intake.max_size_bytes = Some(100);
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    let notifier = Arc::new(MemoryNotifier::new());
    let mut session = IntakeSession::new(Normalizer::new(loaded.intake), notifier.clone());

    let event = session.pick_file(Role::Resume, Some(fixture("sample_resume.txt", None)));
    assert!(matches!(event, IntakeEvent::Rejected(RejectionReason::TooLarge { .. })));
    assert_eq!(notifier.last().unwrap().title, "File too large");
}
