//! Position enrichment: byte offsets to 1-based line and column.

use super::{Encoding, Transformer};
use crate::errors::AnnotationError;
use crate::uast::{Node, Position};

/// Offset to line/column mapping for one source text, built in a single scan.
pub struct LineIndex<'a> {
    bytes: &'a [u8],
    line_starts: Vec<u32>,
    encoding: Encoding,
}

impl<'a> LineIndex<'a> {
    pub fn new(code: &'a str, encoding: Encoding) -> Self {
        let bytes = code.as_bytes();
        let mut line_starts = vec![0u32];
        line_starts.extend(
            bytes
                .iter()
                .enumerate()
                .filter(|(_, b)| **b == b'\n')
                .map(|(i, _)| (i + 1) as u32),
        );
        Self {
            bytes,
            line_starts,
            encoding,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Line and column of `offset`, or `None` past the end of the text.
    /// The end-of-text offset itself is valid.
    pub fn position(&self, offset: u32) -> Option<(u32, u32)> {
        if offset as usize > self.bytes.len() {
            return None;
        }
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let prefix = &self.bytes[line_start as usize..offset as usize];
        let col = if self.encoding.counts_code_points() {
            prefix.iter().filter(|&&b| (b & 0xC0) != 0x80).count() as u32
        } else {
            prefix.len() as u32
        };
        Some((line as u32, col + 1))
    }

    fn resolve(&self, pos: &mut Position) {
        match self.position(pos.offset) {
            Some((line, col)) => {
                pos.line = line;
                pos.col = col;
            }
            None => tracing::debug!(offset = pos.offset, "offset outside source, left unresolved"),
        }
    }
}

/// Pass 2. Resolves every recorded offset; never creates positions.
pub struct PositionEnricher;

impl Transformer for PositionEnricher {
    fn name(&self) -> &'static str {
        "positions"
    }

    fn transform(&self, code: &str, encoding: Encoding, root: &mut Node) -> Result<(), AnnotationError> {
        let index = LineIndex::new(code, encoding);
        root.walk_mut(&mut |node: &mut Node| {
            if let Some(pos) = node.start_position.as_mut() {
                index.resolve(pos);
            }
            if let Some(pos) = node.end_position.as_mut() {
                index.resolve(pos);
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_after_newline_starts_next_line() {
        let index = LineIndex::new("a\nbc", Encoding::Utf8);
        assert_eq!(index.position(2), Some((2, 1)));
        assert_eq!(index.position(4), Some((2, 3)));
        assert_eq!(index.position(5), None);
    }

    #[test]
    fn test_newline_belongs_to_its_line() {
        let index = LineIndex::new("ab\ncd", Encoding::Utf8);
        assert_eq!(index.position(2), Some((1, 3)));
        assert_eq!(index.line_count(), 2);
    }

    #[test]
    fn test_columns_count_code_points_for_utf8() {
        // "é" is two bytes.
        let code = "é=1";
        let utf8 = LineIndex::new(code, Encoding::Utf8);
        let raw = LineIndex::new(code, Encoding::Base64);
        assert_eq!(utf8.position(2), Some((1, 2)));
        assert_eq!(raw.position(2), Some((1, 3)));
    }
}
