//! The native Go tree.
//!
//! Node kinds, field names and field order follow Go's `go/ast` package, so
//! the flattened tree carries the same internal types and roles Go tooling
//! produces. Token positions are folded into each node's `span`.

use uast_core::flatten::{
    Field as FieldValue, FieldDecl, FieldType, NativeNode, NodeSchema, NodeType, Span,
};

use super::token::{ChanDir, Token};
use crate::{native_interface, native_node};

// ---- Comments -------------------------------------------------------------

native_node! {
    /// A single `//` or `/* */` comment.
    Comment { text: String => "Text" }
}

native_node! {
    /// Adjacent comments with no blank line or token between them.
    CommentGroup { list: Vec<Comment> => "List" }
}

// ---- Expressions and types ------------------------------------------------

native_node! {
    /// Placeholder for an expression containing syntax errors.
    BadExpr {}
}

native_node! {
    Ident { name: String => "Name" }
}

native_node! {
    /// `...` in a parameter list or an array length.
    Ellipsis { elt: Option<Box<Expr>> => "Elt" }
}

native_node! {
    BasicLit { kind: Token => "Kind", value: String => "Value" }
}

native_node! {
    FuncLit { ty: Box<FuncType> => "Type", body: Box<BlockStmt> => "Body" }
}

native_node! {
    CompositeLit {
        ty: Option<Box<Expr>> => "Type",
        elts: Vec<Expr> => "Elts",
        incomplete: bool => "Incomplete",
    }
}

native_node! {
    ParenExpr { x: Box<Expr> => "X" }
}

native_node! {
    SelectorExpr { x: Box<Expr> => "X", sel: Box<Ident> => "Sel" }
}

native_node! {
    IndexExpr { x: Box<Expr> => "X", index: Box<Expr> => "Index" }
}

native_node! {
    /// Generic instantiation with several type arguments.
    IndexListExpr { x: Box<Expr> => "X", indices: Vec<Expr> => "Indices" }
}

native_node! {
    SliceExpr {
        x: Box<Expr> => "X",
        low: Option<Box<Expr>> => "Low",
        high: Option<Box<Expr>> => "High",
        max: Option<Box<Expr>> => "Max",
        slice3: bool => "Slice3",
    }
}

native_node! {
    /// `x.(T)`; `ty` is absent in a type switch guard `x.(type)`.
    TypeAssertExpr { x: Box<Expr> => "X", ty: Option<Box<Expr>> => "Type" }
}

native_node! {
    CallExpr { fun: Box<Expr> => "Fun", args: Vec<Expr> => "Args" }
}

native_node! {
    /// `*x`, either a dereference or a pointer type.
    StarExpr { x: Box<Expr> => "X" }
}

native_node! {
    UnaryExpr { op: Token => "Op", x: Box<Expr> => "X" }
}

native_node! {
    BinaryExpr { x: Box<Expr> => "X", op: Token => "Op", y: Box<Expr> => "Y" }
}

native_node! {
    KeyValueExpr { key: Box<Expr> => "Key", value: Box<Expr> => "Value" }
}

native_node! {
    /// Array or slice type; `len` is absent for slices.
    ArrayType { len: Option<Box<Expr>> => "Len", elt: Box<Expr> => "Elt" }
}

native_node! {
    StructType { fields: Box<FieldList> => "Fields", incomplete: bool => "Incomplete" }
}

native_node! {
    FuncType {
        type_params: Option<Box<FieldList>> => "TypeParams",
        params: Box<FieldList> => "Params",
        results: Option<Box<FieldList>> => "Results",
    }
}

native_node! {
    InterfaceType { methods: Box<FieldList> => "Methods", incomplete: bool => "Incomplete" }
}

native_node! {
    MapType { key: Box<Expr> => "Key", value: Box<Expr> => "Value" }
}

native_node! {
    ChanType { dir: ChanDir => "Dir", value: Box<Expr> => "Value" }
}

native_interface! {
    /// Any expression or type expression.
    Expr {
        BadExpr,
        Ident,
        Ellipsis,
        BasicLit,
        FuncLit,
        CompositeLit,
        ParenExpr,
        SelectorExpr,
        IndexExpr,
        IndexListExpr,
        SliceExpr,
        TypeAssertExpr,
        CallExpr,
        StarExpr,
        UnaryExpr,
        BinaryExpr,
        KeyValueExpr,
        ArrayType,
        StructType,
        FuncType,
        InterfaceType,
        MapType,
        ChanType,
    }
}

// ---- Fields ---------------------------------------------------------------

native_node! {
    /// A parameter, result, struct field, or interface element.
    Field {
        names: Vec<Ident> => "Names",
        ty: Option<Box<Expr>> => "Type",
        tag: Option<Box<BasicLit>> => "Tag",
    }
}

native_node! {
    FieldList { list: Vec<Field> => "List" }
}

// ---- Statements -----------------------------------------------------------

native_node! {
    /// Placeholder for a statement containing syntax errors.
    BadStmt {}
}

native_node! {
    DeclStmt { decl: Box<Decl> => "Decl" }
}

native_node! {
    EmptyStmt { implicit: bool => "Implicit" }
}

native_node! {
    LabeledStmt { label: Box<Ident> => "Label", stmt: Option<Box<Stmt>> => "Stmt" }
}

native_node! {
    ExprStmt { x: Box<Expr> => "X" }
}

native_node! {
    SendStmt { chan: Box<Expr> => "Chan", value: Box<Expr> => "Value" }
}

native_node! {
    IncDecStmt { x: Box<Expr> => "X", tok: Token => "Tok" }
}

native_node! {
    AssignStmt { lhs: Vec<Expr> => "Lhs", tok: Token => "Tok", rhs: Vec<Expr> => "Rhs" }
}

native_node! {
    GoStmt { call: Box<Expr> => "Call" }
}

native_node! {
    DeferStmt { call: Box<Expr> => "Call" }
}

native_node! {
    ReturnStmt { results: Vec<Expr> => "Results" }
}

native_node! {
    /// `break`, `continue`, `goto` or `fallthrough`.
    BranchStmt { tok: Token => "Tok", label: Option<Box<Ident>> => "Label" }
}

native_node! {
    BlockStmt { list: Vec<Stmt> => "List" }
}

native_node! {
    IfStmt {
        init: Option<Box<Stmt>> => "Init",
        cond: Box<Expr> => "Cond",
        body: Box<BlockStmt> => "Body",
        else_: Option<Box<Stmt>> => "Else",
    }
}

native_node! {
    /// A `case` or `default` clause; `list` is empty for `default`.
    CaseClause { list: Vec<Expr> => "List", body: Vec<Stmt> => "Body" }
}

native_node! {
    SwitchStmt {
        init: Option<Box<Stmt>> => "Init",
        tag: Option<Box<Expr>> => "Tag",
        body: Box<BlockStmt> => "Body",
    }
}

native_node! {
    TypeSwitchStmt {
        init: Option<Box<Stmt>> => "Init",
        assign: Box<Stmt> => "Assign",
        body: Box<BlockStmt> => "Body",
    }
}

native_node! {
    /// A `case` or `default` clause of a `select`; `comm` is absent for `default`.
    CommClause { comm: Option<Box<Stmt>> => "Comm", body: Vec<Stmt> => "Body" }
}

native_node! {
    SelectStmt { body: Box<BlockStmt> => "Body" }
}

native_node! {
    ForStmt {
        init: Option<Box<Stmt>> => "Init",
        cond: Option<Box<Expr>> => "Cond",
        post: Option<Box<Stmt>> => "Post",
        body: Box<BlockStmt> => "Body",
    }
}

native_node! {
    RangeStmt {
        key: Option<Box<Expr>> => "Key",
        value: Option<Box<Expr>> => "Value",
        tok: Token => "Tok",
        x: Box<Expr> => "X",
        body: Box<BlockStmt> => "Body",
    }
}

native_interface! {
    /// Any statement. Case and comm clauses only appear in switch and
    /// select bodies.
    Stmt {
        BadStmt,
        DeclStmt,
        EmptyStmt,
        LabeledStmt,
        ExprStmt,
        SendStmt,
        IncDecStmt,
        AssignStmt,
        GoStmt,
        DeferStmt,
        ReturnStmt,
        BranchStmt,
        BlockStmt,
        IfStmt,
        CaseClause,
        SwitchStmt,
        TypeSwitchStmt,
        CommClause,
        SelectStmt,
        ForStmt,
        RangeStmt,
    }
}

// ---- Declarations ---------------------------------------------------------

native_node! {
    ImportSpec { name: Option<Box<Ident>> => "Name", path: Box<BasicLit> => "Path" }
}

native_node! {
    /// One `const` or `var` spec.
    ValueSpec {
        names: Vec<Ident> => "Names",
        ty: Option<Box<Expr>> => "Type",
        values: Vec<Expr> => "Values",
    }
}

native_node! {
    TypeSpec {
        name: Box<Ident> => "Name",
        type_params: Option<Box<FieldList>> => "TypeParams",
        ty: Box<Expr> => "Type",
    }
}

native_interface! {
    Spec { ImportSpec, ValueSpec, TypeSpec }
}

native_node! {
    /// Placeholder for a declaration containing syntax errors.
    BadDecl {}
}

native_node! {
    /// `import`, `const`, `type` or `var` declaration, grouped or not.
    GenDecl { tok: Token => "Tok", specs: Vec<Spec> => "Specs" }
}

native_node! {
    FuncDecl {
        recv: Option<Box<FieldList>> => "Recv",
        name: Box<Ident> => "Name",
        ty: Box<FuncType> => "Type",
        body: Option<Box<BlockStmt>> => "Body",
    }
}

native_interface! {
    Decl { BadDecl, GenDecl, FuncDecl }
}

// ---- File -----------------------------------------------------------------

/// A Go source file.
///
/// `imports` duplicates the import specs already reachable through `decls`;
/// the normalizer ignores it. `span` is absent when the file contains
/// neither a package clause nor declarations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct File {
    pub name: Option<Box<Ident>>,
    pub decls: Vec<Decl>,
    pub imports: Vec<ImportSpec>,
    pub comments: Vec<CommentGroup>,
    pub span: Option<Span>,
}

static FILE_SCHEMA: NodeSchema = NodeSchema {
    type_name: "File",
    fields: &[
        FieldDecl {
            name: "Name",
            kind: <Option<Box<Ident>> as FieldType>::KIND,
        },
        FieldDecl {
            name: "Decls",
            kind: <Vec<Decl> as FieldType>::KIND,
        },
        FieldDecl {
            name: "Imports",
            kind: <Vec<ImportSpec> as FieldType>::KIND,
        },
        FieldDecl {
            name: "Comments",
            kind: <Vec<CommentGroup> as FieldType>::KIND,
        },
    ],
};

impl NodeType for File {
    const TYPE_NAME: &'static str = "File";
}

impl NativeNode for File {
    fn schema(&self) -> &'static NodeSchema {
        &FILE_SCHEMA
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => self.name.to_field(),
            1 => self.decls.to_field(),
            2 => self.imports.to_field(),
            3 => self.comments.to_field(),
            _ => FieldValue::Node(None),
        }
    }

    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl Expr {
    /// Wrap in a `Box`; most expression slots are boxed.
    pub fn boxed(self) -> Box<Expr> {
        Box::new(self)
    }
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}
