//! User-facing notifications for intake and analysis outcomes
//!
//! Delivery is fire-and-forget: callers never wait on, retry, or inspect the
//! result of `Notifier::notify`, and a lost notification leaves the selection
//! untouched.

use crate::input::{RejectionReason, Role};
use colored::Colorize;
use log::{log, Level};
use serde::Serialize;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

/// Result of a single intake attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    Accepted { name: String },
    TextAccepted {
        role: Role,
        char_count: usize,
        preview: String,
    },
    Rejected {
        reason: RejectionReason,
        attempted_name: Option<String>,
    },
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }

    pub fn for_outcome(outcome: &IntakeOutcome) -> Self {
        match outcome {
            IntakeOutcome::Accepted { name } => Self::success(
                "File uploaded successfully",
                format!("{} has been selected for analysis.", name),
            ),
            IntakeOutcome::TextAccepted { role, char_count, preview } => {
                let title = match role {
                    Role::Resume => "Resume added",
                    Role::JobDescription => "Job description added",
                };
                Self::success(title, format!("{} characters: {}", char_count, preview))
            }
            IntakeOutcome::Rejected { reason, attempted_name } => {
                Self::for_rejection(reason, attempted_name.as_deref())
            }
        }
    }

    fn for_rejection(reason: &RejectionReason, attempted_name: Option<&str>) -> Self {
        let prefix = attempted_name
            .map(|name| format!("{}: ", name))
            .unwrap_or_default();

        match reason {
            RejectionReason::UnsupportedType { .. } => Self::error(
                "Invalid file type",
                format!("{}please upload a PDF, DOCX, or TXT file.", prefix),
            ),
            RejectionReason::MissingName => {
                Self::error("Invalid file", "The selected file has no name.")
            }
            RejectionReason::TooLarge { size_bytes, limit_bytes, .. } => Self::error(
                "File too large",
                format!(
                    "{}{:.2} MB exceeds the {:.2} MB limit.",
                    prefix,
                    *size_bytes as f64 / 1024.0 / 1024.0,
                    *limit_bytes as f64 / 1024.0 / 1024.0
                ),
            ),
            RejectionReason::EmptyText => {
                Self::error("Empty text", "Please paste some text before submitting.")
            }
        }
    }

    pub fn missing_inputs() -> Self {
        Self::error(
            "Missing files",
            "Please upload both a resume and job description.",
        )
    }

    pub fn analysis_complete() -> Self {
        Self::success(
            "Analysis complete!",
            "Your resume has been analyzed successfully.",
        )
    }

    pub fn analysis_failed(reason: &str) -> Self {
        Self::error("Analysis failed", reason)
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Routes notifications into the `log` facade
#[derive(Debug, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn level_for(severity: Severity) -> Level {
        match severity {
            Severity::Success => Level::Info,
            Severity::Error => Level::Warn,
        }
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        log!(
            Self::level_for(notification.severity),
            "{}: {}",
            notification.title,
            notification.description
        );
    }
}

/// Toast-like lines on stderr
#[derive(Debug)]
pub struct ConsoleNotifier {
    use_colors: bool,
}

impl ConsoleNotifier {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn render(&self, notification: &Notification) -> String {
        let (icon, plain_icon) = match notification.severity {
            Severity::Success => ("✅", "[ok]"),
            Severity::Error => ("❌", "[error]"),
        };

        if self.use_colors {
            let title = match notification.severity {
                Severity::Success => notification.title.green().bold(),
                Severity::Error => notification.title.red().bold(),
            };
            format!("{} {} {}", icon, title, notification.description.dimmed())
        } else {
            format!("{} {} - {}", plain_icon, notification.title, notification.description)
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", self.render(&notification));
    }
}

/// Keeps every notification in memory
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    received: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        match self.received.lock() {
            Ok(received) => received.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications().pop()
    }

    pub fn len(&self) -> usize {
        self.notifications().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        // A poisoned lock only drops the notification.
        if let Ok(mut received) = self.received.lock() {
            received.push(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_file_message() {
        let n = Notification::for_outcome(&IntakeOutcome::Accepted {
            name: "resume.pdf".to_string(),
        });
        assert_eq!(n.title, "File uploaded successfully");
        assert_eq!(n.description, "resume.pdf has been selected for analysis.");
        assert_eq!(n.severity, Severity::Success);
    }

    #[test]
    fn test_rejection_is_error_and_names_the_file() {
        let n = Notification::for_outcome(&IntakeOutcome::Rejected {
            reason: RejectionReason::UnsupportedType { name: "notes.md".to_string() },
            attempted_name: Some("notes.md".to_string()),
        });
        assert_eq!(n.title, "Invalid file type");
        assert!(n.description.starts_with("notes.md: "));
        assert_eq!(n.severity, Severity::Error);
    }

    #[test]
    fn test_text_accepted_title_depends_on_role() {
        let n = Notification::for_outcome(&IntakeOutcome::TextAccepted {
            role: Role::JobDescription,
            char_count: 29,
            preview: "We are hiring a Rust engineer".to_string(),
        });
        assert_eq!(n.title, "Job description added");
        assert_eq!(n.description, "29 characters: We are hiring a Rust engineer");
    }

    #[test]
    fn test_log_notifier_levels() {
        assert_eq!(LogNotifier::level_for(Severity::Success), Level::Info);
        assert_eq!(LogNotifier::level_for(Severity::Error), Level::Warn);

        // No logger installed: delivery is dropped without affecting the caller.
        LogNotifier.notify(Notification::missing_inputs());
        LogNotifier.notify(Notification::analysis_complete());
    }

    #[test]
    fn test_plain_console_rendering() {
        let rendered = ConsoleNotifier::new(false).render(&Notification::missing_inputs());
        assert_eq!(
            rendered,
            "[error] Missing files - Please upload both a resume and job description."
        );
    }

    #[test]
    fn test_memory_notifier_keeps_order() {
        let notifier = MemoryNotifier::new();
        assert!(notifier.is_empty());
        notifier.notify(Notification::missing_inputs());
        notifier.notify(Notification::analysis_complete());

        assert_eq!(notifier.len(), 2);
        assert_eq!(notifier.last().unwrap().title, "Analysis complete!");
    }
}
