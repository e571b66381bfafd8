//! Request-level errors.

use super::error_code::UastErrorCode;
use super::{AnnotationError, ConfigError, ParseError, ToNodeError};

/// Errors that abort a whole request. Aggregates subsystem errors via `From`.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Construction error: {0}")]
    ToNode(#[from] ToNodeError),

    #[error("Annotation error: {0}")]
    Annotation(#[from] AnnotationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl UastErrorCode for DriverError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::ToNode(e) => e.error_code(),
            Self::Annotation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
