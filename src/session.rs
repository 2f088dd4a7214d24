//! Intake session: validation, selection and notification wired together

use crate::error::Result;
use crate::input::{Document, FileCandidate, Normalizer, RejectionReason, Role};
use crate::notifier::{IntakeOutcome, Notification, Notifier};
use crate::selection::SelectionState;
use log::{debug, info};
use std::sync::Arc;

/// How much pasted text is echoed back when it is accepted
pub const TEXT_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Picker dismissed or nothing dropped
    NoFileChosen,
    /// Submit is unavailable for a blank draft
    BlankDraft,
}

/// What an intake call did to the selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeEvent {
    Accepted,
    Rejected(RejectionReason),
    Ignored(IgnoreReason),
}

impl IntakeEvent {
    /// For callers with no disabled submit button: a blank draft counts as
    /// `EmptyText` instead of passing silently. A dismissed picker stays a no-op.
    pub fn into_result(self) -> Result<()> {
        match self {
            IntakeEvent::Accepted | IntakeEvent::Ignored(IgnoreReason::NoFileChosen) => Ok(()),
            IntakeEvent::Ignored(IgnoreReason::BlankDraft) => {
                Err(RejectionReason::EmptyText.into())
            }
            IntakeEvent::Rejected(reason) => Err(reason.into()),
        }
    }
}

/// Owns the selection for one user and reports every intake through the
/// notifier it was built with. Rejections leave the prior selection as is.
pub struct IntakeSession {
    normalizer: Normalizer,
    selection: SelectionState,
    notifier: Arc<dyn Notifier>,
}

impl IntakeSession {
    pub fn new(normalizer: Normalizer, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            normalizer,
            selection: SelectionState::new(),
            notifier,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    pub fn can_analyze(&self) -> bool {
        self.selection.can_analyze()
    }

    /// File picker result. `None` means the picker was dismissed.
    pub fn pick_file(&mut self, role: Role, file: Option<FileCandidate>) -> IntakeEvent {
        match file {
            Some(file) => self.intake_file(role, file),
            None => {
                debug!("No file chosen for {}", role);
                IntakeEvent::Ignored(IgnoreReason::NoFileChosen)
            }
        }
    }

    /// Drag-and-drop. Only the first dropped file is considered.
    pub fn drop_files(&mut self, role: Role, files: Vec<FileCandidate>) -> IntakeEvent {
        if files.len() > 1 {
            debug!("{} files dropped for {}, using the first", files.len(), role);
        }
        self.pick_file(role, files.into_iter().next())
    }

    pub fn submit_text(&mut self, role: Role, raw: &str) -> IntakeEvent {
        if !Normalizer::can_submit_text(raw) {
            debug!("Submit unavailable for blank {} draft", role);
            return IntakeEvent::Ignored(IgnoreReason::BlankDraft);
        }

        match self.normalizer.validate_text(raw) {
            Ok(text) => {
                let outcome = IntakeOutcome::TextAccepted {
                    role,
                    char_count: text.char_count(),
                    preview: text.preview(TEXT_PREVIEW_CHARS),
                };
                self.accept(role, text.into());
                self.notifier.notify(Notification::for_outcome(&outcome));
                IntakeEvent::Accepted
            }
            Err(reason) => self.reject(reason),
        }
    }

    pub fn clear(&mut self, role: Role) {
        info!("Cleared {} selection", role);
        self.selection.clear(role);
    }

    fn intake_file(&mut self, role: Role, file: FileCandidate) -> IntakeEvent {
        match self.normalizer.validate_file(file) {
            Ok(doc) => {
                let name = doc.name().to_string();
                self.accept(role, doc.into());
                self.notifier
                    .notify(Notification::for_outcome(&IntakeOutcome::Accepted { name }));
                IntakeEvent::Accepted
            }
            Err(reason) => self.reject(reason),
        }
    }

    fn accept(&mut self, role: Role, doc: Document) {
        info!("Selected {} for {}", doc.display_name(), role);
        self.selection.set(role, Some(doc));
    }

    fn reject(&self, reason: RejectionReason) -> IntakeEvent {
        info!("Rejected input: {}", reason);
        let attempted_name = reason.attempted_name().map(str::to_string);
        self.notifier.notify(Notification::for_outcome(&IntakeOutcome::Rejected {
            reason: reason.clone(),
            attempted_name,
        }));
        IntakeEvent::Rejected(reason)
    }
}
