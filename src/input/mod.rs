//! Input processing module
//! Handles file detection, validation and normalization into documents

pub mod document;
pub mod file_detector;
pub mod normalizer;

pub use document::{
    ContentHandle, Document, FileCandidate, FileDocument, RejectionReason, Role, TextDocument,
};
pub use normalizer::Normalizer;
