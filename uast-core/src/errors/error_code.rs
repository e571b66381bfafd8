//! UastErrorCode trait: stable codes for log events and responses.

/// Every error enum implements this to expose a structured error code.
pub trait UastErrorCode {
    /// Returns the error code string (e.g., "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted coded string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const UNSUPPORTED_LANGUAGE: &str = "UNSUPPORTED_LANGUAGE";
pub const INVALID_ENCODING: &str = "INVALID_ENCODING";
pub const CONTENT_TOO_LARGE: &str = "CONTENT_TOO_LARGE";
pub const TONODE_ERROR: &str = "TONODE_ERROR";
pub const ANNOTATION_ERROR: &str = "ANNOTATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
