//! Lowering from the tree-sitter-go concrete syntax tree to the native Go tree.
//!
//! The lowering is total: constructs it cannot map become `BadExpr`,
//! `BadStmt` or `BadDecl` over their source span, and missing required
//! children become zero-width `BadExpr`s at the end of their parent.

use tree_sitter::Node as TsNode;
use uast_core::flatten::Span;

use super::ast::*;
use super::diagnostics::{collect_syntax_errors, first_token, Diagnostic};
use super::token::{ChanDir, Token};

/// Lower a parsed tree. Returns the file and its diagnostics in source order.
pub fn lower(src: &str, root: TsNode<'_>) -> (File, Vec<Diagnostic>) {
    let mut lowering = Lowering {
        src,
        diagnostics: Vec::new(),
    };
    let file = lowering.file(root);
    collect_syntax_errors(root, src, &mut lowering.diagnostics);

    let mut diagnostics = lowering.diagnostics;
    diagnostics.sort_by_key(|d| (d.line, d.col));
    (file, diagnostics)
}

fn span_of(n: TsNode<'_>) -> Span {
    Span::new(n.start_byte() as u32, n.end_byte() as u32)
}

/// Zero-width span at the end of `n`.
fn end_of(n: TsNode<'_>) -> Span {
    let end = n.end_byte() as u32;
    Span::new(end, end)
}

fn named<'t>(n: TsNode<'t>) -> Vec<TsNode<'t>> {
    let mut cursor = n.walk();
    let out: Vec<_> = n
        .named_children(&mut cursor)
        .filter(|c| !c.is_extra())
        .collect();
    out
}

fn by_field<'t>(n: TsNode<'t>, field: &str) -> Vec<TsNode<'t>> {
    let mut cursor = n.walk();
    let out: Vec<_> = n
        .children_by_field_name(field, &mut cursor)
        .filter(|c| c.is_named() && !c.is_extra())
        .collect();
    out
}

/// Whether `n` has an anonymous child token spelled `token`.
fn has_token(n: TsNode<'_>, token: &str) -> bool {
    let mut cursor = n.walk();
    let found = n
        .children(&mut cursor)
        .any(|c| !c.is_named() && c.kind() == token);
    found
}

fn token_node<'t>(n: TsNode<'t>, token: &str) -> Option<TsNode<'t>> {
    let mut cursor = n.walk();
    let found = n
        .children(&mut cursor)
        .find(|c| !c.is_named() && c.kind() == token);
    found
}

struct Lowering<'s> {
    src: &'s str,
    diagnostics: Vec<Diagnostic>,
}

impl<'s> Lowering<'s> {
    fn text(&self, n: TsNode<'_>) -> &'s str {
        n.utf8_text(self.src.as_bytes()).unwrap_or_default()
    }

    // ---- File ----------------------------------------------------------

    fn file(&mut self, root: TsNode<'_>) -> File {
        let mut file = File::default();
        let mut package = None;

        for child in named(root) {
            match child.kind() {
                "package_clause" => {
                    if file.name.is_none() {
                        package = Some(span_of(child));
                        file.name = named(child).first().map(|n| Box::new(self.ident(*n)));
                    }
                }
                "import_declaration" | "const_declaration" | "var_declaration"
                | "type_declaration" => {
                    let decl = self.gen_decl(child);
                    file.decls.push(Decl::GenDecl(decl));
                }
                "function_declaration" | "method_declaration" => {
                    let decl = self.func_decl(child);
                    file.decls.push(Decl::FuncDecl(decl));
                }
                "ERROR" => file.decls.push(Decl::BadDecl(BadDecl {
                    span: span_of(child),
                })),
                _ => {
                    let found = self.describe_token(Some(child));
                    self.diagnostics.push(Diagnostic::at(
                        &child,
                        format!("expected declaration, found {found}"),
                    ));
                    file.decls.push(Decl::BadDecl(BadDecl {
                        span: span_of(child),
                    }));
                }
            }
        }

        if package.is_none() {
            let first = first_token(root);
            let found = self.describe_token(first);
            let diagnostic = match first {
                Some(token) => {
                    Diagnostic::at(&token, format!("expected 'package', found {found}"))
                }
                None => {
                    let end = root.end_position();
                    Diagnostic::new(
                        end.row + 1,
                        end.column + 1,
                        format!("expected 'package', found {found}"),
                    )
                }
            };
            self.diagnostics.push(diagnostic);
        }

        for decl in &file.decls {
            if let Decl::GenDecl(gen) = decl {
                for spec in &gen.specs {
                    if let Spec::ImportSpec(import) = spec {
                        file.imports.push(import.clone());
                    }
                }
            }
        }
        file.comments = self.comments(root);

        let start = package.or_else(|| file.decls.first().map(Decl::span));
        let end = file
            .decls
            .last()
            .map(Decl::span)
            .or_else(|| file.name.as_ref().map(|n| n.span))
            .or(package);
        file.span = match (start, end) {
            (Some(s), Some(e)) => Some(Span::new(s.start, e.end)),
            _ => None,
        };
        file
    }

    /// Quote the first token under `n`, or `'EOF'`.
    fn describe_token(&self, n: Option<TsNode<'_>>) -> String {
        let token = n.and_then(first_token);
        match token.map(|t| self.text(t)).filter(|t| !t.is_empty()) {
            Some(text) => format!("'{}'", text.lines().next().unwrap_or(text)),
            None => "'EOF'".to_string(),
        }
    }

    fn comments(&self, root: TsNode<'_>) -> Vec<CommentGroup> {
        let mut nodes = Vec::new();
        collect_comments(root, &mut nodes);

        let mut groups: Vec<CommentGroup> = Vec::new();
        let mut prev_end: Option<usize> = None;
        for n in nodes {
            let comment = Comment {
                text: self.text(n).trim_end_matches('\r').to_string(),
                span: span_of(n),
            };
            let adjacent = prev_end.is_some_and(|end| {
                let gap = self.src.get(end..n.start_byte()).unwrap_or("x");
                gap.trim().is_empty() && gap.matches('\n').count() <= 1
            });
            prev_end = Some(n.end_byte());
            match groups.last_mut() {
                Some(group) if adjacent => {
                    group.span = group.span.cover(comment.span);
                    group.list.push(comment);
                }
                _ => groups.push(CommentGroup {
                    span: comment.span,
                    list: vec![comment],
                }),
            }
        }
        groups
    }

    // ---- Declarations --------------------------------------------------

    fn gen_decl(&mut self, n: TsNode<'_>) -> GenDecl {
        let tok = match n.kind() {
            "import_declaration" => Token::Import,
            "const_declaration" => Token::Const,
            "type_declaration" => Token::Type,
            _ => Token::Var,
        };
        let mut specs = Vec::new();
        self.specs(n, &mut specs);
        GenDecl {
            tok,
            specs,
            span: span_of(n),
        }
    }

    fn specs(&mut self, n: TsNode<'_>, out: &mut Vec<Spec>) {
        for c in named(n) {
            match c.kind() {
                "import_spec" => out.push(self.import_spec(c).into()),
                "const_spec" | "var_spec" => out.push(self.value_spec(c).into()),
                "type_spec" | "type_alias" => out.push(self.type_spec(c).into()),
                "import_spec_list" | "var_spec_list" => self.specs(c, out),
                _ => {}
            }
        }
    }

    fn import_spec(&mut self, n: TsNode<'_>) -> ImportSpec {
        let path = match n.child_by_field_name("path") {
            Some(p) => self.lit(p, Token::String),
            None => BasicLit {
                kind: Token::String,
                value: String::new(),
                span: end_of(n),
            },
        };
        ImportSpec {
            name: n
                .child_by_field_name("name")
                .map(|name| Box::new(self.ident(name))),
            path: Box::new(path),
            span: span_of(n),
        }
    }

    fn value_spec(&mut self, n: TsNode<'_>) -> ValueSpec {
        ValueSpec {
            names: by_field(n, "name").into_iter().map(|i| self.ident(i)).collect(),
            ty: self.opt_field_expr(n, "type"),
            values: self.expr_list(n, "value"),
            span: span_of(n),
        }
    }

    fn type_spec(&mut self, n: TsNode<'_>) -> TypeSpec {
        TypeSpec {
            name: Box::new(self.field_ident(n, "name")),
            type_params: n
                .child_by_field_name("type_parameters")
                .map(|p| Box::new(self.field_list(p))),
            ty: self.field_expr(n, "type"),
            span: span_of(n),
        }
    }

    fn func_decl(&mut self, n: TsNode<'_>) -> FuncDecl {
        FuncDecl {
            recv: n
                .child_by_field_name("receiver")
                .map(|r| Box::new(self.field_list(r))),
            name: Box::new(self.field_ident(n, "name")),
            ty: Box::new(self.func_type(n)),
            body: n
                .child_by_field_name("body")
                .map(|b| Box::new(self.block(b))),
            span: span_of(n),
        }
    }

    /// Signature of a function declaration, literal, type or method element.
    /// Spans from the start of `n` to the end of the results or parameters.
    fn func_type(&mut self, n: TsNode<'_>) -> FuncType {
        let params = match n.child_by_field_name("parameters") {
            Some(p) => self.field_list(p),
            None => FieldList {
                list: Vec::new(),
                span: end_of(n),
            },
        };
        let results = n.child_by_field_name("result").map(|r| self.results(r));
        let end = results.as_ref().map_or(params.span.end, |r| r.span.end);
        FuncType {
            type_params: n
                .child_by_field_name("type_parameters")
                .map(|p| Box::new(self.field_list(p))),
            span: Span::new(n.start_byte() as u32, end),
            params: Box::new(params),
            results: results.map(Box::new),
        }
    }

    fn results(&mut self, n: TsNode<'_>) -> FieldList {
        if n.kind() == "parameter_list" {
            return self.field_list(n);
        }
        let span = span_of(n);
        FieldList {
            list: vec![Field {
                names: Vec::new(),
                ty: Some(self.expr(n).boxed()),
                tag: None,
                span,
            }],
            span,
        }
    }

    /// A parameter or type parameter list.
    fn field_list(&mut self, n: TsNode<'_>) -> FieldList {
        let list = named(n).into_iter().map(|p| self.param(p)).collect();
        FieldList {
            list,
            span: span_of(n),
        }
    }

    fn param(&mut self, p: TsNode<'_>) -> Field {
        let span = span_of(p);
        let names = by_field(p, "name").into_iter().map(|i| self.ident(i)).collect();
        let ty = match p.kind() {
            "parameter_declaration" | "type_parameter_declaration" => {
                self.opt_field_expr(p, "type")
            }
            "variadic_parameter_declaration" => {
                let start = token_node(p, "...").map_or(span.start, |t| t.start_byte() as u32);
                Some(
                    Expr::Ellipsis(Ellipsis {
                        elt: self.opt_field_expr(p, "type"),
                        span: Span::new(start, span.end),
                    })
                    .boxed(),
                )
            }
            _ => Some(self.expr(p).boxed()),
        };
        Field {
            names,
            ty,
            tag: None,
            span,
        }
    }

    fn struct_fields(&mut self, n: TsNode<'_>) -> FieldList {
        let Some(list) = named(n)
            .into_iter()
            .find(|c| c.kind() == "field_declaration_list")
        else {
            return FieldList {
                list: Vec::new(),
                span: span_of(n),
            };
        };
        let fields = named(list)
            .into_iter()
            .filter(|f| f.kind() == "field_declaration")
            .map(|f| self.struct_field(f))
            .collect();
        FieldList {
            list: fields,
            span: span_of(list),
        }
    }

    fn struct_field(&mut self, f: TsNode<'_>) -> Field {
        let span = span_of(f);
        let names: Vec<Ident> = by_field(f, "name").into_iter().map(|i| self.ident(i)).collect();
        let mut ty = self.opt_field_expr(f, "type");
        if names.is_empty() && has_token(f, "*") {
            ty = ty.map(|x| {
                let end = x.span().end;
                Expr::StarExpr(StarExpr {
                    x,
                    span: Span::new(span.start, end),
                })
                .boxed()
            });
        }
        Field {
            names,
            ty,
            tag: f
                .child_by_field_name("tag")
                .map(|t| Box::new(self.lit(t, Token::String))),
            span,
        }
    }

    fn interface_elems(&mut self, n: TsNode<'_>) -> FieldList {
        let mut list = Vec::new();
        for e in named(n) {
            let span = span_of(e);
            let field = match e.kind() {
                "method_elem" | "method_spec" => {
                    let mut sig = self.func_type(e);
                    sig.span = Span::new(sig.params.span.start, sig.span.end);
                    Field {
                        names: vec![self.field_ident(e, "name")],
                        ty: Some(Expr::FuncType(sig).boxed()),
                        tag: None,
                        span,
                    }
                }
                _ => Field {
                    names: Vec::new(),
                    ty: Some(self.expr(e).boxed()),
                    tag: None,
                    span,
                },
            };
            list.push(field);
        }
        FieldList {
            list,
            span: span_of(n),
        }
    }

    // ---- Statements ----------------------------------------------------

    fn block(&mut self, n: TsNode<'_>) -> BlockStmt {
        BlockStmt {
            list: self.statements(n, &[]),
            span: span_of(n),
        }
    }

    fn field_block(&mut self, n: TsNode<'_>, field: &str) -> BlockStmt {
        match n.child_by_field_name(field) {
            Some(b) => self.block(b),
            None => BlockStmt {
                list: Vec::new(),
                span: end_of(n),
            },
        }
    }

    /// Statements among the named children of `n`, skipping the `skip` nodes.
    fn statements(&mut self, n: TsNode<'_>, skip: &[TsNode<'_>]) -> Vec<Stmt> {
        let mut out = Vec::new();
        for c in named(n) {
            if skip.iter().any(|s| s.id() == c.id()) {
                continue;
            }
            if c.kind() == "statement_list" {
                for s in named(c) {
                    out.push(self.stmt(s));
                }
            } else {
                out.push(self.stmt(c));
            }
        }
        out
    }

    fn stmt(&mut self, n: TsNode<'_>) -> Stmt {
        let span = span_of(n);
        match n.kind() {
            "expression_statement" => ExprStmt {
                x: self.first_expr(n),
                span,
            }
            .into(),
            "send_statement" => SendStmt {
                chan: self.field_expr(n, "channel"),
                value: self.field_expr(n, "value"),
                span,
            }
            .into(),
            "inc_statement" | "dec_statement" => IncDecStmt {
                x: self.first_expr(n),
                tok: if n.kind() == "inc_statement" {
                    Token::Inc
                } else {
                    Token::Dec
                },
                span,
            }
            .into(),
            "assignment_statement" => AssignStmt {
                lhs: self.expr_list(n, "left"),
                tok: self.operator(n).unwrap_or(Token::Assign),
                rhs: self.expr_list(n, "right"),
                span,
            }
            .into(),
            "short_var_declaration" => AssignStmt {
                lhs: self.expr_list(n, "left"),
                tok: Token::Define,
                rhs: self.expr_list(n, "right"),
                span,
            }
            .into(),
            "labeled_statement" => {
                let label = n
                    .child_by_field_name("label")
                    .or_else(|| named(n).first().copied());
                let stmt = named(n)
                    .into_iter()
                    .find(|c| Some(c.id()) != label.map(|l| l.id()))
                    .map(|s| Box::new(self.stmt(s)));
                let label = match label {
                    Some(l) => self.ident(l),
                    None => Ident::new("", Span::new(span.start, span.start)),
                };
                LabeledStmt {
                    label: Box::new(label),
                    stmt,
                    span,
                }
                .into()
            }
            "return_statement" => ReturnStmt {
                results: match named(n).first() {
                    Some(list) => self.exprs(*list),
                    None => Vec::new(),
                },
                span,
            }
            .into(),
            "go_statement" => GoStmt {
                call: self.first_expr(n),
                span,
            }
            .into(),
            "defer_statement" => DeferStmt {
                call: self.first_expr(n),
                span,
            }
            .into(),
            "break_statement" | "continue_statement" | "goto_statement"
            | "fallthrough_statement" => {
                let tok = match n.kind() {
                    "break_statement" => Token::Break,
                    "continue_statement" => Token::Continue,
                    "goto_statement" => Token::Goto,
                    _ => Token::Fallthrough,
                };
                BranchStmt {
                    tok,
                    label: named(n).first().map(|l| Box::new(self.ident(*l))),
                    span,
                }
                .into()
            }
            "block" => self.block(n).into(),
            "if_statement" => self.if_stmt(n).into(),
            "for_statement" => self.for_stmt(n),
            "expression_switch_statement" => self.switch_stmt(n).into(),
            "type_switch_statement" => self.type_switch_stmt(n).into(),
            "select_statement" => self.select_stmt(n).into(),
            "receive_statement" => self.receive_stmt(n),
            "const_declaration" | "var_declaration" | "type_declaration" => DeclStmt {
                decl: Box::new(Decl::GenDecl(self.gen_decl(n))),
                span,
            }
            .into(),
            "empty_statement" => EmptyStmt {
                implicit: false,
                span,
            }
            .into(),
            "ERROR" => BadStmt { span }.into(),
            _ => ExprStmt {
                x: self.expr(n).boxed(),
                span,
            }
            .into(),
        }
    }

    fn opt_stmt(&mut self, n: TsNode<'_>, field: &str) -> Option<Box<Stmt>> {
        n.child_by_field_name(field).map(|s| Box::new(self.stmt(s)))
    }

    fn if_stmt(&mut self, n: TsNode<'_>) -> IfStmt {
        IfStmt {
            init: self.opt_stmt(n, "initializer"),
            cond: self.field_expr(n, "condition"),
            body: Box::new(self.field_block(n, "consequence")),
            else_: self.opt_stmt(n, "alternative"),
            span: span_of(n),
        }
    }

    fn for_stmt(&mut self, n: TsNode<'_>) -> Stmt {
        let span = span_of(n);
        let body_node = n.child_by_field_name("body");
        let body = Box::new(self.field_block(n, "body"));
        let header = named(n)
            .into_iter()
            .find(|c| Some(c.id()) != body_node.map(|b| b.id()));

        match header {
            Some(h) if h.kind() == "range_clause" => {
                let mut left = self.expr_list(h, "left").into_iter();
                let tok = if has_token(h, ":=") {
                    Token::Define
                } else if h.child_by_field_name("left").is_some() {
                    Token::Assign
                } else {
                    Token::Illegal
                };
                RangeStmt {
                    key: left.next().map(Box::new),
                    value: left.next().map(Box::new),
                    tok,
                    x: self.field_expr(h, "right"),
                    body,
                    span,
                }
                .into()
            }
            Some(h) if h.kind() == "for_clause" => ForStmt {
                init: self.opt_stmt(h, "initializer"),
                cond: self.opt_field_expr(h, "condition"),
                post: self.opt_stmt(h, "update"),
                body,
                span,
            }
            .into(),
            Some(h) => ForStmt {
                init: None,
                cond: Some(self.expr(h).boxed()),
                post: None,
                body,
                span,
            }
            .into(),
            None => ForStmt {
                init: None,
                cond: None,
                post: None,
                body,
                span,
            }
            .into(),
        }
    }

    /// Span of a switch or select body, from `{` to the end of `n`.
    fn brace_span(n: TsNode<'_>) -> Span {
        let start = token_node(n, "{").map_or(n.start_byte(), |b| b.start_byte());
        Span::new(start as u32, n.end_byte() as u32)
    }

    fn case_body(&mut self, c: TsNode<'_>, field: &str) -> Vec<Stmt> {
        let skip = by_field(c, field);
        self.statements(c, &skip)
    }

    fn switch_stmt(&mut self, n: TsNode<'_>) -> SwitchStmt {
        let mut clauses = Vec::new();
        for c in named(n) {
            match c.kind() {
                "expression_case" => clauses.push(Stmt::CaseClause(CaseClause {
                    list: self.expr_list(c, "value"),
                    body: self.case_body(c, "value"),
                    span: span_of(c),
                })),
                "default_case" => clauses.push(Stmt::CaseClause(CaseClause {
                    list: Vec::new(),
                    body: self.statements(c, &[]),
                    span: span_of(c),
                })),
                _ => {}
            }
        }
        SwitchStmt {
            init: self.opt_stmt(n, "initializer"),
            tag: self.opt_field_expr(n, "value"),
            body: Box::new(BlockStmt {
                list: clauses,
                span: Self::brace_span(n),
            }),
            span: span_of(n),
        }
    }

    fn type_switch_stmt(&mut self, n: TsNode<'_>) -> TypeSwitchStmt {
        let x = self.field_expr(n, "value");
        let brace = token_node(n, "{").map_or(n.end_byte(), |b| b.start_byte());
        let mut cursor = n.walk();
        let guard_end = n
            .children(&mut cursor)
            .filter(|c| c.kind() == ")" && c.end_byte() <= brace)
            .last()
            .map_or(x.span().end, |c| c.end_byte() as u32);
        let guard = Expr::TypeAssertExpr(TypeAssertExpr {
            span: Span::new(x.span().start, guard_end),
            x,
            ty: None,
        });

        let alias: Vec<Expr> = by_field(n, "alias")
            .into_iter()
            .flat_map(|a| match a.kind() {
                "expression_list" => named(a),
                _ => vec![a],
            })
            .map(|a| Expr::Ident(self.ident(a)))
            .collect();
        let assign = match alias.first() {
            Some(first) => {
                let span = Span::new(first.span().start, guard.span().end);
                Stmt::AssignStmt(AssignStmt {
                    lhs: alias,
                    tok: Token::Define,
                    rhs: vec![guard],
                    span,
                })
            }
            None => Stmt::ExprStmt(ExprStmt {
                span: guard.span(),
                x: guard.boxed(),
            }),
        };

        let mut clauses = Vec::new();
        for c in named(n) {
            match c.kind() {
                "type_case" => clauses.push(Stmt::CaseClause(CaseClause {
                    list: by_field(c, "type").into_iter().map(|t| self.expr(t)).collect(),
                    body: self.case_body(c, "type"),
                    span: span_of(c),
                })),
                "default_case" => clauses.push(Stmt::CaseClause(CaseClause {
                    list: Vec::new(),
                    body: self.statements(c, &[]),
                    span: span_of(c),
                })),
                _ => {}
            }
        }

        TypeSwitchStmt {
            init: self.opt_stmt(n, "initializer"),
            assign: Box::new(assign),
            body: Box::new(BlockStmt {
                list: clauses,
                span: Self::brace_span(n),
            }),
            span: span_of(n),
        }
    }

    fn select_stmt(&mut self, n: TsNode<'_>) -> SelectStmt {
        let mut clauses = Vec::new();
        for c in named(n) {
            match c.kind() {
                "communication_case" => clauses.push(Stmt::CommClause(CommClause {
                    comm: self.opt_stmt(c, "communication"),
                    body: self.case_body(c, "communication"),
                    span: span_of(c),
                })),
                "default_case" => clauses.push(Stmt::CommClause(CommClause {
                    comm: None,
                    body: self.statements(c, &[]),
                    span: span_of(c),
                })),
                _ => {}
            }
        }
        SelectStmt {
            body: Box::new(BlockStmt {
                list: clauses,
                span: Self::brace_span(n),
            }),
            span: span_of(n),
        }
    }

    fn receive_stmt(&mut self, n: TsNode<'_>) -> Stmt {
        let span = span_of(n);
        let rhs = self.field_expr(n, "right");
        if n.child_by_field_name("left").is_none() {
            return ExprStmt { x: rhs, span }.into();
        }
        AssignStmt {
            lhs: self.expr_list(n, "left"),
            tok: if has_token(n, ":=") {
                Token::Define
            } else {
                Token::Assign
            },
            rhs: vec![*rhs],
            span,
        }
        .into()
    }

    // ---- Expressions ---------------------------------------------------

    fn ident(&self, n: TsNode<'_>) -> Ident {
        Ident::new(self.text(n), span_of(n))
    }

    fn field_ident(&self, n: TsNode<'_>, field: &str) -> Ident {
        match n.child_by_field_name(field) {
            Some(i) => self.ident(i),
            None => Ident::new("", end_of(n)),
        }
    }

    fn lit(&self, n: TsNode<'_>, kind: Token) -> BasicLit {
        BasicLit {
            kind,
            value: self.text(n).to_string(),
            span: span_of(n),
        }
    }

    fn operator(&self, n: TsNode<'_>) -> Option<Token> {
        n.child_by_field_name("operator")
            .and_then(|op| Token::from_operator(self.text(op)))
    }

    /// Required child expression; a zero-width `BadExpr` when missing.
    fn field_expr(&mut self, n: TsNode<'_>, field: &str) -> Box<Expr> {
        match n.child_by_field_name(field) {
            Some(x) => self.expr(x).boxed(),
            None => Expr::BadExpr(BadExpr { span: end_of(n) }).boxed(),
        }
    }

    fn opt_field_expr(&mut self, n: TsNode<'_>, field: &str) -> Option<Box<Expr>> {
        n.child_by_field_name(field).map(|x| self.expr(x).boxed())
    }

    fn first_expr(&mut self, n: TsNode<'_>) -> Box<Expr> {
        match named(n).first() {
            Some(x) => self.expr(*x).boxed(),
            None => Expr::BadExpr(BadExpr { span: end_of(n) }).boxed(),
        }
    }

    /// Expressions of an `expression_list`, or the single expression `n`.
    fn exprs(&mut self, n: TsNode<'_>) -> Vec<Expr> {
        if n.kind() == "expression_list" {
            named(n).into_iter().map(|x| self.expr(x)).collect()
        } else {
            vec![self.expr(n)]
        }
    }

    fn expr_list(&mut self, n: TsNode<'_>, field: &str) -> Vec<Expr> {
        match n.child_by_field_name(field) {
            Some(list) => self.exprs(list),
            None => Vec::new(),
        }
    }

    fn elements(&mut self, n: Option<TsNode<'_>>) -> Vec<Expr> {
        let Some(n) = n else {
            return Vec::new();
        };
        named(n).into_iter().map(|e| self.element(e)).collect()
    }

    fn element(&mut self, e: TsNode<'_>) -> Expr {
        match e.kind() {
            "literal_element" => match named(e).first() {
                Some(inner) => self.element(*inner),
                None => BadExpr { span: span_of(e) }.into(),
            },
            "keyed_element" => {
                let parts = named(e);
                let key = match parts.first() {
                    Some(k) => self.element(*k),
                    None => BadExpr { span: span_of(e) }.into(),
                };
                let value = match parts.get(1) {
                    Some(v) => self.element(*v),
                    None => BadExpr { span: end_of(e) }.into(),
                };
                KeyValueExpr {
                    key: key.boxed(),
                    value: value.boxed(),
                    span: span_of(e),
                }
                .into()
            }
            _ => self.expr(e),
        }
    }

    fn chan_dir(&self, n: TsNode<'_>) -> ChanDir {
        let text = self.text(n);
        if text.starts_with("<-") {
            return ChanDir::Recv;
        }
        let head = match n.child_by_field_name("value") {
            Some(v) => text
                .get(..v.start_byte().saturating_sub(n.start_byte()))
                .unwrap_or(text),
            None => text,
        };
        if head.contains("<-") {
            ChanDir::Send
        } else {
            ChanDir::Both
        }
    }

    fn expr(&mut self, n: TsNode<'_>) -> Expr {
        let span = span_of(n);
        match n.kind() {
            "identifier" | "field_identifier" | "type_identifier" | "package_identifier"
            | "label_name" | "blank_identifier" | "dot" | "true" | "false" | "nil" | "iota" => {
                self.ident(n).into()
            }
            "int_literal" => self.lit(n, Token::Int).into(),
            "float_literal" => self.lit(n, Token::Float).into(),
            "imaginary_literal" => self.lit(n, Token::Imag).into(),
            "rune_literal" => self.lit(n, Token::Char).into(),
            "interpreted_string_literal" | "raw_string_literal" => {
                self.lit(n, Token::String).into()
            }
            "parenthesized_expression" | "parenthesized_type" => ParenExpr {
                x: self.first_expr(n),
                span,
            }
            .into(),
            "unary_expression" => {
                let x = self.field_expr(n, "operand");
                match self.operator(n) {
                    Some(Token::Mul) => StarExpr { x, span }.into(),
                    op => UnaryExpr {
                        op: op.unwrap_or(Token::Illegal),
                        x,
                        span,
                    }
                    .into(),
                }
            }
            "binary_expression" => BinaryExpr {
                x: self.field_expr(n, "left"),
                op: self.operator(n).unwrap_or(Token::Illegal),
                y: self.field_expr(n, "right"),
                span,
            }
            .into(),
            "selector_expression" => SelectorExpr {
                x: self.field_expr(n, "operand"),
                sel: Box::new(self.field_ident(n, "field")),
                span,
            }
            .into(),
            "index_expression" => IndexExpr {
                x: self.field_expr(n, "operand"),
                index: self.field_expr(n, "index"),
                span,
            }
            .into(),
            "slice_expression" => {
                let max = self.opt_field_expr(n, "capacity");
                SliceExpr {
                    x: self.field_expr(n, "operand"),
                    low: self.opt_field_expr(n, "start"),
                    high: self.opt_field_expr(n, "end"),
                    slice3: max.is_some(),
                    max,
                    span,
                }
                .into()
            }
            "call_expression" => {
                let args = match n.child_by_field_name("arguments") {
                    Some(a) => named(a).into_iter().map(|x| self.expr(x)).collect(),
                    None => Vec::new(),
                };
                CallExpr {
                    fun: self.field_expr(n, "function"),
                    args,
                    span,
                }
                .into()
            }
            "type_assertion_expression" => TypeAssertExpr {
                x: self.field_expr(n, "operand"),
                ty: Some(self.field_expr(n, "type")),
                span,
            }
            .into(),
            "type_conversion_expression" => CallExpr {
                fun: self.field_expr(n, "type"),
                args: vec![*self.field_expr(n, "operand")],
                span,
            }
            .into(),
            "composite_literal" => CompositeLit {
                ty: self.opt_field_expr(n, "type"),
                elts: self.elements(n.child_by_field_name("body")),
                incomplete: false,
                span,
            }
            .into(),
            "literal_value" => CompositeLit {
                ty: None,
                elts: self.elements(Some(n)),
                incomplete: false,
                span,
            }
            .into(),
            "func_literal" => FuncLit {
                ty: Box::new(self.func_type(n)),
                body: Box::new(self.field_block(n, "body")),
                span,
            }
            .into(),
            "generic_type" | "type_instantiation_expression" => {
                let ty = n.child_by_field_name("type");
                let indices = match n.child_by_field_name("type_arguments") {
                    Some(args) => named(args).into_iter().map(|t| self.expr(t)).collect(),
                    None => named(n)
                        .into_iter()
                        .filter(|c| Some(c.id()) != ty.map(|t| t.id()))
                        .map(|t| self.expr(t))
                        .collect(),
                };
                IndexListExpr {
                    x: self.field_expr(n, "type"),
                    indices,
                    span,
                }
                .into()
            }
            "pointer_type" => StarExpr {
                x: self.first_expr(n),
                span,
            }
            .into(),
            "array_type" => ArrayType {
                len: self.opt_field_expr(n, "length"),
                elt: self.field_expr(n, "element"),
                span,
            }
            .into(),
            "implicit_length_array_type" => {
                let dots = token_node(n, "...").map_or(span, span_of);
                ArrayType {
                    len: Some(Expr::from(Ellipsis { elt: None, span: dots }).boxed()),
                    elt: self.field_expr(n, "element"),
                    span,
                }
                .into()
            }
            "slice_type" => ArrayType {
                len: None,
                elt: self.field_expr(n, "element"),
                span,
            }
            .into(),
            "map_type" => MapType {
                key: self.field_expr(n, "key"),
                value: self.field_expr(n, "value"),
                span,
            }
            .into(),
            "channel_type" => ChanType {
                dir: self.chan_dir(n),
                value: self.field_expr(n, "value"),
                span,
            }
            .into(),
            "function_type" => self.func_type(n).into(),
            "struct_type" => StructType {
                fields: Box::new(self.struct_fields(n)),
                incomplete: false,
                span,
            }
            .into(),
            "interface_type" => InterfaceType {
                methods: Box::new(self.interface_elems(n)),
                incomplete: false,
                span,
            }
            .into(),
            "qualified_type" => SelectorExpr {
                x: Expr::Ident(self.field_ident(n, "package")).boxed(),
                sel: Box::new(self.field_ident(n, "name")),
                span,
            }
            .into(),
            "negated_type" => UnaryExpr {
                op: Token::Tilde,
                x: self.first_expr(n),
                span,
            }
            .into(),
            "type_constraint" | "type_elem" | "constraint_elem" | "expression_list"
            | "variadic_argument" | "literal_element" => self.union(n),
            _ => BadExpr { span }.into(),
        }
    }

    /// A single wrapped expression, or a `|` union folded left as Go does.
    fn union(&mut self, n: TsNode<'_>) -> Expr {
        let mut parts = named(n).into_iter();
        let Some(first) = parts.next() else {
            return BadExpr { span: span_of(n) }.into();
        };
        let mut acc = self.expr(first);
        for next in parts {
            let y = self.expr(next);
            let span = acc.span().cover(y.span());
            acc = BinaryExpr {
                x: acc.boxed(),
                op: Token::Or,
                y: y.boxed(),
                span,
            }
            .into();
        }
        acc
    }
}

fn collect_comments<'t>(n: TsNode<'t>, out: &mut Vec<TsNode<'t>>) {
    if n.kind() == "comment" {
        out.push(n);
        return;
    }
    let child_count = n.child_count();
    for i in 0..child_count {
        if let Some(child) = n.child(i) {
            collect_comments(child, out);
        }
    }
}
