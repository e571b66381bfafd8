//! Content encoding indicator.

use serde::{Deserialize, Serialize};

/// How request content was encoded on the wire. Decides column counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Encoding {
    /// Text; columns advance once per code point.
    #[default]
    #[serde(rename = "UTF8", alias = "utf8", alias = "utf-8")]
    Utf8,
    /// Raw bytes; columns advance once per byte.
    #[serde(rename = "BASE64", alias = "base64")]
    Base64,
}

impl Encoding {
    pub fn counts_code_points(self) -> bool {
        matches!(self, Self::Utf8)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF8",
            Self::Base64 => "BASE64",
        }
    }
}
