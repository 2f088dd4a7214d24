//! Normalized input documents and the raw file candidates they are built from

use crate::error::{IntakeError, Result};
use crate::input::file_detector::FileType;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Which slot a document fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Resume,
    JobDescription,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Resume => write!(f, "resume"),
            Role::JobDescription => write!(f, "job description"),
        }
    }
}

/// Opaque locator for a file's bytes. Never read here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContentHandle(PathBuf);

impl ContentHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// A file as the user handed it over, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub size_bytes: u64,
    /// Declared type. Often empty or wrong for `.docx`.
    pub mime_type: String,
    pub content: ContentHandle,
}

impl FileCandidate {
    pub fn new(
        name: impl Into<String>,
        size_bytes: u64,
        mime_type: impl Into<String>,
        content: ContentHandle,
    ) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
            content,
        }
    }

    /// Build a candidate from a file on disk. Only metadata is touched.
    pub fn from_path(path: &Path, mime_type: Option<&str>) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(IntakeError::InvalidInput(format!(
                "Not a file: {}",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            name,
            size_bytes: metadata.len(),
            mime_type: mime_type.unwrap_or_default().to_string(),
            content: ContentHandle::new(path),
        })
    }
}

/// A validated file. Only the normalizer constructs these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDocument {
    name: String,
    size_bytes: u64,
    mime_type: String,
    content: ContentHandle,
}

impl FileDocument {
    pub(crate) fn from_candidate(candidate: FileCandidate) -> Self {
        Self {
            name: candidate.name,
            size_bytes: candidate.size_bytes,
            mime_type: candidate.mime_type,
            content: candidate.content,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn content(&self) -> &ContentHandle {
        &self.content
    }

    pub fn file_type(&self) -> FileType {
        FileType::detect(&self.name, &self.mime_type)
    }

    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0 / 1024.0
    }
}

/// Pasted text, guaranteed non-blank. Stored as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextDocument {
    text: String,
}

impl TextDocument {
    pub(crate) fn new(text: String) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// First `max_chars` characters, with an ellipsis when cut
    pub fn preview(&self, max_chars: usize) -> String {
        if self.char_count() <= max_chars {
            self.text.clone()
        } else {
            let head: String = self.text.chars().take(max_chars).collect();
            format!("{}...", head)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Document {
    File(FileDocument),
    Text(TextDocument),
}

impl Document {
    pub fn display_name(&self) -> String {
        match self {
            Document::File(file) => file.name().to_string(),
            Document::Text(text) => format!("pasted text ({} characters)", text.char_count()),
        }
    }

    pub fn as_file(&self) -> Option<&FileDocument> {
        match self {
            Document::File(file) => Some(file),
            Document::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextDocument> {
        match self {
            Document::Text(text) => Some(text),
            Document::File(_) => None,
        }
    }
}

impl From<FileDocument> for Document {
    fn from(file: FileDocument) -> Self {
        Document::File(file)
    }
}

impl From<TextDocument> for Document {
    fn from(text: TextDocument) -> Self {
        Document::Text(text)
    }
}

/// Why an input could not become a `Document`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("unsupported file type: {name}")]
    UnsupportedType { name: String },

    #[error("file has no name")]
    MissingName,

    #[error("{name} is {size_bytes} bytes, limit is {limit_bytes} bytes")]
    TooLarge {
        name: String,
        size_bytes: u64,
        limit_bytes: u64,
    },

    #[error("text is empty")]
    EmptyText,
}

impl RejectionReason {
    /// The filename the user tried, when there was one
    pub fn attempted_name(&self) -> Option<&str> {
        match self {
            RejectionReason::UnsupportedType { name } | RejectionReason::TooLarge { name, .. } => {
                Some(name)
            }
            RejectionReason::MissingName | RejectionReason::EmptyText => None,
        }
    }
}
