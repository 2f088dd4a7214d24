//! File type detection from declared MIME type and filename suffix

use crate::config::{DOCX_MIME, PDF_MIME, TEXT_MIME};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
    Text,
    Unknown,
}

impl FileType {
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            PDF_MIME => FileType::Pdf,
            DOCX_MIME => FileType::Docx,
            TEXT_MIME => FileType::Text,
            _ => FileType::Unknown,
        }
    }

    /// Literal suffix match, no case folding
    pub fn from_name(name: &str) -> Self {
        if name.ends_with(".pdf") {
            FileType::Pdf
        } else if name.ends_with(".docx") {
            FileType::Docx
        } else if name.ends_with(".txt") {
            FileType::Text
        } else {
            FileType::Unknown
        }
    }

    /// The declared MIME type wins; the suffix fills in when it is missing or unknown.
    pub fn detect(name: &str, mime: &str) -> Self {
        match Self::from_mime(mime) {
            FileType::Unknown => Self::from_name(name),
            known => known,
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileType::Pdf => write!(f, "PDF"),
            FileType::Docx => write!(f, "DOCX"),
            FileType::Text => write!(f, "TXT"),
            FileType::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_is_case_sensitive() {
        assert_eq!(FileType::from_name("resume.docx"), FileType::Docx);
        assert_eq!(FileType::from_name("RESUME.DOCX"), FileType::Unknown);
        assert_eq!(FileType::from_name("notes.md"), FileType::Unknown);
    }

    #[test]
    fn test_mime_takes_precedence() {
        assert_eq!(FileType::detect("scan.txt", PDF_MIME), FileType::Pdf);
        assert_eq!(FileType::detect("resume.docx", ""), FileType::Docx);
        assert_eq!(FileType::detect("notes.md", "text/markdown"), FileType::Unknown);
    }
}
