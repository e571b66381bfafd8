//! Source positions: a byte offset plus the derived line and column.

use serde::{Deserialize, Serialize};

/// One endpoint of a node span.
///
/// `line` and `col` are 1-based and stay 0 until the position pass resolves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub col: u32,
}

impl Position {
    /// An unresolved position at `offset`.
    pub fn at(offset: u32) -> Self {
        Self {
            offset,
            line: 0,
            col: 0,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.line != 0
    }
}
