//! Driver configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_MAX_CONTENT_SIZE};

/// Configuration for request handling.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DriverConfig {
    /// Maximum accepted content size in bytes. Default: 16 MiB.
    pub max_content_size: Option<u64>,
    /// Language name accepted in the request hint. Default: "go".
    pub language: Option<String>,
}

impl DriverConfig {
    /// Returns the effective content size limit.
    pub fn effective_max_content_size(&self) -> u64 {
        self.max_content_size.unwrap_or(DEFAULT_MAX_CONTENT_SIZE)
    }

    /// Returns the effective language name.
    pub fn effective_language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Whether a request's language hint is acceptable. Empty hints are.
    pub fn accepts_language(&self, hint: Option<&str>) -> bool {
        match hint.map(str::trim) {
            None | Some("") => true,
            Some(lang) => lang.eq_ignore_ascii_case(self.effective_language()),
        }
    }
}
