//! Go role rules.

use uast_core::annotation::RoleRule;
use uast_core::uast::Role;

/// Role rules for Go node kinds. Per type the first matching rule wins, so
/// property rules precede the plain type rule they refine.
pub static ROLE_RULES: &[RoleRule] = &[
    RoleRule::by_property("GenDecl", "Tok", "import", Role::Import),
    RoleRule::by_property("GenDecl", "Tok", "const", Role::Declaration),
    RoleRule::by_property("GenDecl", "Tok", "var", Role::Declaration),
    RoleRule::by_property("GenDecl", "Tok", "type", Role::Type),
    RoleRule::by_property("AssignStmt", "Tok", ":=", Role::Declaration),
    RoleRule::by_type("AssignStmt", Role::Assignment),
    RoleRule::by_property("BasicLit", "Kind", "STRING", Role::String),
    RoleRule::by_property("BasicLit", "Kind", "INT", Role::Number),
    RoleRule::by_property("BasicLit", "Kind", "FLOAT", Role::Number),
    RoleRule::by_property("BasicLit", "Kind", "IMAG", Role::Number),
    RoleRule::by_property("BasicLit", "Kind", "CHAR", Role::Literal),
    RoleRule::by_type("File", Role::File),
    RoleRule::by_type("Ident", Role::Identifier),
    RoleRule::by_type("BinaryExpr", Role::Binary),
    RoleRule::by_type("UnaryExpr", Role::Unary),
    RoleRule::by_type("ExprStmt", Role::Statement),
    RoleRule::by_type("DeclStmt", Role::Declaration),
    RoleRule::by_type("ImportSpec", Role::Import),
    RoleRule::by_type("ValueSpec", Role::Variable),
    RoleRule::by_type("FuncDecl", Role::Function),
    RoleRule::by_type("FuncLit", Role::Function),
    RoleRule::by_type("FieldList", Role::ArgsList),
    RoleRule::by_type("IfStmt", Role::If),
    RoleRule::by_type("SwitchStmt", Role::Switch),
    RoleRule::by_type("TypeSwitchStmt", Role::Switch),
    RoleRule::by_type("SelectStmt", Role::Switch),
    RoleRule::by_type("CaseClause", Role::Case),
    RoleRule::by_type("CommClause", Role::Case),
    RoleRule::by_type("ForStmt", Role::For),
    RoleRule::by_type("RangeStmt", Role::For),
    RoleRule::by_type("BlockStmt", Role::Block),
    RoleRule::by_type("ReturnStmt", Role::Return),
    RoleRule::by_type("CallExpr", Role::Call),
    RoleRule::by_type("SliceExpr", Role::List),
    RoleRule::by_type("CompositeLit", Role::Literal),
    RoleRule::by_type("TypeSpec", Role::Type),
    RoleRule::by_type("ArrayType", Role::Type),
    RoleRule::by_type("ChanType", Role::Type),
    RoleRule::by_type("FuncType", Role::Type),
    RoleRule::by_type("InterfaceType", Role::Type),
    RoleRule::by_type("MapType", Role::Type),
    RoleRule::by_type("StructType", Role::Type),
    RoleRule::by_type("Comment", Role::Comment),
    RoleRule::by_type("BadExpr", Role::Incomplete),
    RoleRule::by_type("BadStmt", Role::Incomplete),
    RoleRule::by_type("BadDecl", Role::Incomplete),
];
