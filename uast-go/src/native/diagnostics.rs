//! Go-style diagnostics from error-tolerant parse trees.

use std::fmt;

use tree_sitter::Node;

/// A parse problem, printed as `line:col: message` with 1-based line and
/// byte column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub col: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, col: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            col,
            message: message.into(),
        }
    }

    pub fn at(node: &Node, message: impl Into<String>) -> Self {
        let p = node.start_position();
        Self::new(p.row + 1, p.column + 1, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.col, self.message)
    }
}

/// Collect one diagnostic per ERROR or MISSING node. An ERROR subtree
/// reports once and is not descended into.
pub fn collect_syntax_errors(root: Node, src: &str, out: &mut Vec<Diagnostic>) {
    if !root.has_error() {
        return;
    }
    walk(root, src, out);
}

fn walk(node: Node, src: &str, out: &mut Vec<Diagnostic>) {
    if node.is_missing() {
        out.push(Diagnostic::at(&node, format!("missing '{}'", node.kind())));
        return;
    }
    if node.is_error() {
        let found = first_token(node)
            .and_then(|t| t.utf8_text(src.as_bytes()).ok())
            .map(|t| t.lines().next().unwrap_or_default().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "EOF".to_string());
        out.push(Diagnostic::at(&node, format!("syntax error: unexpected {found}")));
        return;
    }
    let child_count = node.child_count();
    for i in 0..child_count {
        if let Some(child) = node.child(i) {
            if child.has_error() || child.is_missing() {
                walk(child, src, out);
            }
        }
    }
}

/// First source token under `node`: the leftmost leaf that is not a comment,
/// or a whole literal. A tree root without children has none.
pub fn first_token(node: Node) -> Option<Node> {
    let mut current = node;
    loop {
        if is_literal_kind(current.kind()) {
            return Some(current);
        }
        let mut next = None;
        let child_count = current.child_count();
        for i in 0..child_count {
            if let Some(child) = current.child(i) {
                if !child.is_extra() {
                    next = Some(child);
                    break;
                }
            }
        }
        match next {
            Some(child) => current = child,
            None if current.id() == node.id() && node.parent().is_none() => return None,
            None => return Some(current),
        }
    }
}

fn is_literal_kind(kind: &str) -> bool {
    matches!(
        kind,
        "interpreted_string_literal"
            | "raw_string_literal"
            | "rune_literal"
            | "int_literal"
            | "float_literal"
            | "imaginary_literal"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_go_style() {
        let d = Diagnostic::new(1, 1, "expected 'package', found 'EOF'");
        assert_eq!(d.to_string(), "1:1: expected 'package', found 'EOF'");
    }
}
