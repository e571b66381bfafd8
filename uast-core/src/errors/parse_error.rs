//! Native front-end errors.

use super::error_code::{self, UastErrorCode};

/// Errors raised before or while the native parser runs.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Grammar could not be loaded for language {language}: {message}")]
    GrammarNotFound { language: String, message: String },

    #[error("Unsupported language: {language}")]
    UnsupportedLanguage { language: String },

    #[error("Content is not valid {encoding}: {message}")]
    InvalidEncoding { encoding: String, message: String },

    #[error("Content of {size} bytes exceeds the limit of {max} bytes")]
    ContentTooLarge { size: u64, max: u64 },

    #[error("Parser produced no tree")]
    NoTree,
}

impl UastErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedLanguage { .. } => error_code::UNSUPPORTED_LANGUAGE,
            Self::InvalidEncoding { .. } => error_code::INVALID_ENCODING,
            Self::ContentTooLarge { .. } => error_code::CONTENT_TOO_LARGE,
            _ => error_code::PARSE_ERROR,
        }
    }
}
