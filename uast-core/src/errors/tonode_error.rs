//! Canonicalization errors.

use super::error_code::{self, UastErrorCode};

/// Errors raised while building a canonical node from a nested key/value structure.
#[derive(Debug, thiserror::Error)]
pub enum ToNodeError {
    #[error("Expected an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Invalid offset in {key}: {value}")]
    InvalidOffset { key: String, value: String },

    #[error("Span start {start} is after end {end}")]
    InvalidSpan { start: u32, end: u32 },

    #[error("Unsupported value for {key}: {found}")]
    UnsupportedValue { key: String, found: &'static str },

    #[error("Root container must hold exactly one entry, found {count}")]
    AmbiguousRoot { count: usize },

    #[error("Duplicate property {key}")]
    DuplicateProperty { key: String },

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl UastErrorCode for ToNodeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
            _ => error_code::TONODE_ERROR,
        }
    }
}
