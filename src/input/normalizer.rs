//! Turns raw files and pasted text into validated documents

use crate::config::IntakeConfig;
use crate::input::document::{FileCandidate, FileDocument, RejectionReason, TextDocument};
use log::debug;

/// Validates intake against the configured accept lists.
///
/// A file passes when EITHER its declared MIME type is accepted OR its name
/// ends with an accepted suffix. Browsers report `.docx` types unreliably, so
/// the suffix is trusted as much as the MIME type. File contents are never
/// inspected: a renamed binary passes as long as its name or declared type
/// matches.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: IntakeConfig,
}

impl Normalizer {
    pub fn new(config: IntakeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    pub fn validate_file(
        &self,
        file: FileCandidate,
    ) -> std::result::Result<FileDocument, RejectionReason> {
        if file.name.is_empty() {
            return Err(RejectionReason::MissingName);
        }

        let valid_type = self
            .config
            .accepted_mime_types
            .iter()
            .any(|mime| *mime == file.mime_type);
        let valid_extension = self
            .config
            .accepted_extensions
            .iter()
            .any(|ext| file.name.ends_with(ext.as_str()));

        debug!(
            "File validation: name={} type={:?} valid_type={} valid_extension={}",
            file.name, file.mime_type, valid_type, valid_extension
        );

        if !(valid_type || valid_extension) {
            return Err(RejectionReason::UnsupportedType { name: file.name });
        }

        if let Some(limit) = self.config.max_size_bytes {
            if file.size_bytes > limit {
                return Err(RejectionReason::TooLarge {
                    name: file.name,
                    size_bytes: file.size_bytes,
                    limit_bytes: limit,
                });
            }
        }

        Ok(FileDocument::from_candidate(file))
    }

    pub fn validate_text(&self, raw: &str) -> std::result::Result<TextDocument, RejectionReason> {
        if !Self::can_submit_text(raw) {
            return Err(RejectionReason::EmptyText);
        }
        Ok(TextDocument::new(raw.to_string()))
    }

    /// Whether the submit action should be offered for this draft
    pub fn can_submit_text(raw: &str) -> bool {
        !raw.trim().is_empty()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(IntakeConfig::default())
    }
}
