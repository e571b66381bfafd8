//! Annotation pass errors.

use super::error_code::{self, UastErrorCode};

/// Raised by a pass that cannot complete. The built-in passes never raise it;
/// unmatched shapes and missing offsets are not errors.
#[derive(Debug, thiserror::Error)]
#[error("Annotation pass {pass} failed: {message}")]
pub struct AnnotationError {
    pub pass: &'static str,
    pub message: String,
}

impl AnnotationError {
    pub fn new(pass: &'static str, message: impl Into<String>) -> Self {
        Self {
            pass,
            message: message.into(),
        }
    }
}

impl UastErrorCode for AnnotationError {
    fn error_code(&self) -> &'static str {
        error_code::ANNOTATION_ERROR
    }
}
