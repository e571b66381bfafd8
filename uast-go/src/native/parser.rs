//! Go parser.

use tree_sitter::{Language, Parser};
use uast_core::errors::ParseError;

use super::ast::File;
use super::diagnostics::Diagnostic;
use super::lower::lower;

/// The native tree of one source file plus its parse diagnostics. The tree
/// is complete even when diagnostics are present; broken regions are `Bad*`
/// nodes.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub file: File,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedFile {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Diagnostics formatted `line:col: message`.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }
}

/// Stateless Go parser. A fresh tree-sitter parser is created per call, so
/// one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoParser;

impl GoParser {
    pub fn new() -> Self {
        Self
    }

    pub fn language_name(&self) -> &'static str {
        "go"
    }

    pub fn parse(&self, source: &str) -> Result<ParsedFile, ParseError> {
        let language: Language = tree_sitter_go::LANGUAGE.into();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| ParseError::GrammarNotFound {
                language: self.language_name().to_string(),
                message: e.to_string(),
            })?;

        let tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;
        let (file, diagnostics) = lower(source, tree.root_node());
        tracing::debug!(
            decls = file.decls.len(),
            diagnostics = diagnostics.len(),
            "parsed go source"
        );
        Ok(ParsedFile { file, diagnostics })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::ast::{Decl, Expr, Spec};
    use crate::native::token::Token;
    use uast_core::flatten::Span;

    fn parse(src: &str) -> ParsedFile {
        GoParser::new().parse(src).unwrap()
    }

    #[test]
    fn test_package_clause_only() {
        let parsed = parse("package main");
        assert!(!parsed.has_errors(), "{:?}", parsed.diagnostics);
        let name = parsed.file.name.as_ref().unwrap();
        assert_eq!(name.name, "main");
        assert_eq!(name.span, Span::new(8, 12));
        assert_eq!(parsed.file.span, Some(Span::new(0, 12)));
    }

    #[test]
    fn test_precedence_is_preserved() {
        let parsed = parse("package p\nconst a = 3 + 5 * 10");
        let Decl::GenDecl(decl) = &parsed.file.decls[0] else {
            panic!("expected GenDecl");
        };
        assert_eq!(decl.tok, Token::Const);
        let Spec::ValueSpec(spec) = &decl.specs[0] else {
            panic!("expected ValueSpec");
        };
        let Expr::BinaryExpr(add) = &spec.values[0] else {
            panic!("expected BinaryExpr");
        };
        assert_eq!(add.op, Token::Add);
        assert!(matches!(*add.y, Expr::BinaryExpr(ref mul) if mul.op == Token::Mul));
    }

    #[test]
    fn test_missing_package_is_reported() {
        let parsed = parse("");
        assert_eq!(parsed.messages(), ["1:1: expected 'package', found 'EOF'"]);
        assert!(parsed.file.span.is_none());

        let parsed = parse("const a = 1");
        assert_eq!(parsed.messages(), ["1:1: expected 'package', found 'const'"]);
    }

    #[test]
    fn test_imports_are_duplicated_on_file() {
        let parsed = parse("package p\n\nimport (\n\t\"fmt\"\n\tx \"os\"\n)\n");
        assert_eq!(parsed.file.imports.len(), 2);
        assert_eq!(parsed.file.imports[0].path.value, "\"fmt\"");
        assert_eq!(parsed.file.imports[1].name.as_ref().unwrap().name, "x");
    }

    #[test]
    fn test_adjacent_comments_group() {
        let src = "// a\n// b\n\n// c\npackage p\n";
        let parsed = parse(src);
        let groups = &parsed.file.comments;
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].list.len(), 2);
        assert_eq!(groups[0].list[1].text, "// b");
        assert_eq!(groups[1].list[0].text, "// c");
    }

    #[test]
    fn test_syntax_errors_do_not_abort_lowering() {
        let parsed = parse("package p\nfunc f() { x := }\n");
        assert!(parsed.has_errors());
        assert!(parsed.file.name.is_some());
    }
}
