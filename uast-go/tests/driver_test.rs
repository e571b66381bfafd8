//! End-to-end tests: Go source in, annotated canonical tree out.

use base64::Engine as _;
use uast_core::annotation::Encoding;
use uast_core::config::UastConfig;
use uast_core::protocol::{Request, Response, Status};
use uast_core::uast::{Node, Role};
use uast_go::Driver;

fn handle(content: &str) -> Response {
    Driver::new(&UastConfig::default()).handle(&Request::new(content))
}

fn span(node: &Node) -> Option<(u32, u32)> {
    Some((node.start_position?.offset, node.end_position?.offset))
}

fn find<'a>(root: &'a Node, internal_type: &str) -> Vec<&'a Node> {
    root.preorder()
        .filter(|n| n.internal_type == internal_type)
        .collect()
}

#[test]
fn test_package_main() {
    let response = handle("package main");
    assert_eq!(response.status, Status::Ok, "{:?}", response.errors);
    let root = response.ast.unwrap();

    assert_eq!(root.internal_type, "File");
    assert!(root.has_role(Role::File));
    assert_eq!(span(&root), Some((0, 12)));
    assert_eq!(root.children.len(), 1);

    let name = &root.children[0];
    assert_eq!(name.internal_type, "Ident");
    assert_eq!(name.internal_name, "Name");
    assert_eq!(name.property("Name"), Some("main"));
    assert_eq!(name.roles, [Role::Identifier]);
    assert_eq!(span(name), Some((8, 12)));
    let start = name.start_position.unwrap();
    assert_eq!((start.line, start.col), (1, 9));
}

#[test]
fn test_package_main_serialization() {
    let response = handle("package main");
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["status"], "ok");
    assert!(value.get("errors").is_none());
    assert_eq!(value["ast"]["InternalType"], "File");
    assert_eq!(value["ast"]["Roles"], serde_json::json!(["File"]));
    assert_eq!(value["ast"]["StartOffset"], 0);
    assert_eq!(value["ast"]["EndOffset"], 12);
    assert_eq!(
        value["ast"]["Children"][0]["StartPosition"],
        serde_json::json!({ "Offset": 8, "Line": 1, "Col": 9 })
    );
    assert_eq!(value["ast"]["Children"][0]["Properties"]["Name"], "main");
}

/// Multiplication binds tighter than addition and every leaf carries the
/// offsets of its exact substring.
#[test]
fn test_const_expression_precedence() {
    let src = "const a = 3 + 5 * 10";
    let response = handle(src);
    // No package clause: the tree is still returned.
    assert_eq!(response.status, Status::Fatal);
    assert_eq!(response.errors, ["1:1: expected 'package', found 'const'"]);
    let root = response.ast.unwrap();
    assert!(root.has_role(Role::File));

    let decl = find(&root, "GenDecl")[0];
    assert_eq!(decl.property("Tok"), Some("const"));
    assert_eq!(decl.roles, [Role::Declaration]);
    assert_eq!(span(decl), Some((0, 20)));

    let spec = find(&root, "ValueSpec")[0];
    assert_eq!(span(spec), Some((6, 20)));
    let wrappers: Vec<_> = spec
        .children
        .iter()
        .map(|c| (c.internal_type.as_str(), c.internal_name.as_str()))
        .collect();
    assert_eq!(wrappers, [("ListOfIdent", "Names"), ("ListOfExpr", "Values")]);

    let add = &spec.children[1].children[0];
    assert_eq!(add.internal_type, "BinaryExpr");
    assert_eq!(add.property("Op"), Some("+"));
    assert_eq!(add.children.len(), 2);
    let (x, y) = (&add.children[0], &add.children[1]);
    assert_eq!((x.internal_name.as_str(), y.internal_name.as_str()), ("X", "Y"));
    assert_eq!(y.internal_type, "BinaryExpr");
    assert_eq!(y.property("Op"), Some("*"));

    for leaf in root.preorder().filter(|n| n.children.is_empty()) {
        let (start, end) = span(leaf).unwrap();
        let text = &src[start as usize..end as usize];
        let expected = leaf.property("Value").or(leaf.property("Name")).unwrap();
        assert_eq!(text, expected, "{}", leaf.internal_type);
    }
    let lits: Vec<_> = find(&root, "BasicLit").into_iter().filter_map(span).collect();
    assert_eq!(lits, [(10, 11), (14, 15), (18, 20)]);
    assert!(find(&root, "BasicLit").iter().all(|l| l.roles == [Role::Number]));
}

#[test]
fn test_empty_input() {
    let response = handle("");
    assert_eq!(response.status, Status::Fatal);
    assert_eq!(response.errors, ["1:1: expected 'package', found 'EOF'"]);
    let root = response.ast.unwrap();
    assert_eq!(root.roles, [Role::File]);
    assert!(root.children.is_empty());
    assert!(root.start_position.is_none());
}

#[test]
fn test_hello_world() {
    let src = "package main\nimport \"fmt\"\nfunc main() { fmt.Println(\"hello\") }";
    let response = handle(src);
    assert!(response.is_ok(), "{:?}", response.errors);
    let root = response.ast.unwrap();

    let import = find(&root, "GenDecl")[0];
    assert_eq!(import.roles, [Role::Import]);
    assert_eq!(span(import), Some((13, 25)));
    let spec = find(&root, "ImportSpec")[0];
    assert_eq!(spec.roles, [Role::Import]);
    let path = &spec.children[0];
    assert_eq!(path.internal_name, "Path");
    assert_eq!(path.property("Value"), Some("\"fmt\""));
    assert_eq!(path.roles, [Role::String]);
    assert_eq!(span(path), Some((20, 25)));

    // Imports are reachable only through Decls.
    assert!(root.children.iter().all(|c| c.internal_name != "Imports"));

    let func = find(&root, "FuncDecl")[0];
    assert_eq!(func.roles, [Role::Function]);
    let sig = find(func, "FuncType")[0];
    assert_eq!(sig.internal_name, "Type");
    assert_eq!(span(sig), Some((26, 37)));

    let call = find(&root, "CallExpr")[0];
    assert_eq!(call.roles, [Role::Call]);
    let sel = find(call, "SelectorExpr")[0];
    assert_eq!(sel.internal_name, "Fun");
    let idents: Vec<_> = find(sel, "Ident")
        .into_iter()
        .map(|i| (i.property("Name").unwrap(), span(i).unwrap()))
        .collect();
    assert_eq!(idents, [("fmt", (40, 43)), ("Println", (44, 51))]);

    let body = find(func, "BlockStmt")[0];
    assert_eq!(body.roles, [Role::Block]);
    let end = body.end_position.unwrap();
    assert_eq!((end.line, end.col), (3, 37));
}

#[test]
fn test_comments_are_kept() {
    let src = "// Package p does things.\npackage p\n\n// f returns one.\nfunc f() int { return 1 }\n";
    let response = handle(src);
    assert!(response.is_ok(), "{:?}", response.errors);
    let root = response.ast.unwrap();

    let groups = root
        .children
        .iter()
        .find(|c| c.internal_name == "Comments")
        .unwrap();
    assert_eq!(groups.internal_type, "ListOfCommentGroup");
    assert_eq!(groups.children.len(), 2);
    let comments = find(&root, "Comment");
    assert_eq!(comments[0].property("Text"), Some("// Package p does things."));
    assert!(comments.iter().all(|c| c.roles == [Role::Comment]));

    let ret = find(&root, "ReturnStmt")[0];
    assert_eq!(ret.roles, [Role::Return]);
}

#[test]
fn test_statements_and_roles() {
    let src = "package p\n\nfunc f(xs []int) (n int) {\n\tfor _, x := range xs {\n\t\tif x > 0 {\n\t\t\tn += x\n\t\t}\n\t}\n\tswitch n {\n\tcase 1:\n\t\tn = -n\n\tdefault:\n\t}\n\ty := xs[1:2]\n\t_ = y\n\treturn\n}\n";
    let response = handle(src);
    assert!(response.is_ok(), "{:?}", response.errors);
    let root = response.ast.unwrap();

    let range = find(&root, "RangeStmt")[0];
    assert_eq!(range.roles, [Role::For]);
    assert_eq!(range.property("Tok"), Some(":="));
    assert_eq!(find(&root, "IfStmt")[0].roles, [Role::If]);
    assert_eq!(find(&root, "SwitchStmt")[0].roles, [Role::Switch]);
    assert_eq!(find(&root, "CaseClause").len(), 2);
    assert_eq!(find(&root, "UnaryExpr")[0].property("Op"), Some("-"));
    assert_eq!(find(&root, "SliceExpr")[0].roles, [Role::List]);
    assert_eq!(find(&root, "ArrayType")[0].roles, [Role::Type]);

    let assigns: Vec<_> = find(&root, "AssignStmt")
        .into_iter()
        .map(|a| (a.property("Tok").unwrap(), a.roles.clone()))
        .collect();
    assert_eq!(
        assigns,
        [
            ("+=", vec![Role::Assignment]),
            ("=", vec![Role::Assignment]),
            (":=", vec![Role::Declaration]),
            ("=", vec![Role::Assignment]),
        ]
    );

    let params = find(&root, "FieldList");
    assert!(params.iter().all(|p| p.roles == [Role::ArgsList]));
}

#[test]
fn test_syntax_error_returns_partial_tree() {
    let response = handle("package p\n\nfunc f() {\n\tx := \n}\n");
    assert_eq!(response.status, Status::Fatal);
    assert!(!response.errors.is_empty());
    let root = response.ast.unwrap();
    assert!(root.has_role(Role::File));
    assert_eq!(root.children[0].property("Name"), Some("p"));
}

#[test]
fn test_base64_content() {
    let encoded = base64::engine::general_purpose::STANDARD.encode("package é\n");
    let request = Request {
        content: encoded,
        language: Some("go".to_string()),
        encoding: Encoding::Base64,
    };
    let response = Driver::new(&UastConfig::default()).handle(&request);
    assert!(response.is_ok(), "{:?}", response.errors);
    let name = &response.ast.unwrap().children[0];
    assert_eq!(span(name), Some((8, 10)));
    // Byte columns: "é" is two bytes wide.
    assert_eq!(name.end_position.map(|p| p.col), Some(11));
}

#[test]
fn test_invalid_base64_is_fatal() {
    let request = Request {
        content: "%%%".to_string(),
        language: None,
        encoding: Encoding::Base64,
    };
    let response = Driver::new(&UastConfig::default()).handle(&request);
    assert_eq!(response.status, Status::Fatal);
    assert!(response.ast.is_none());
    assert!(response.errors[0].starts_with("[INVALID_ENCODING]"));
}

#[test]
fn test_unsupported_language() {
    let mut request = Request::new("package main");
    request.language = Some("python".to_string());
    let response = Driver::new(&UastConfig::default()).handle(&request);
    assert_eq!(response.status, Status::Fatal);
    assert!(response.ast.is_none());
    assert!(response.errors[0].starts_with("[UNSUPPORTED_LANGUAGE]"));

    request.language = Some("GO".to_string());
    assert!(Driver::new(&UastConfig::default()).handle(&request).is_ok());
}

#[test]
fn test_content_size_limit() {
    let mut config = UastConfig::default();
    config.driver.max_content_size = Some(12);
    let driver = Driver::new(&config);
    assert!(driver.handle(&Request::new("package main")).is_ok());
    let response = driver.handle(&Request::new("package mains"));
    assert_eq!(response.status, Status::Fatal);
    assert!(response.errors[0].starts_with("[CONTENT_TOO_LARGE]"));
}
