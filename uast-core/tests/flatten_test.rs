//! Tests for schema-driven flattening.

use std::borrow::Cow;

use uast_core::flatten::{
    Field, FieldDecl, FieldKind, FieldType, Flattener, GenericNode, NativeNode, NodeSchema,
    NodeType, Span,
};

/// A leaf kind with one scalar.
struct X {
    value: String,
    span: Span,
}

static X_SCHEMA: NodeSchema = NodeSchema {
    type_name: "X",
    fields: &[FieldDecl {
        name: "Value",
        kind: FieldKind::Scalar,
    }],
};

impl NodeType for X {
    const TYPE_NAME: &'static str = "X";
}

impl NativeNode for X {
    fn schema(&self) -> &'static NodeSchema {
        &X_SCHEMA
    }

    fn field(&self, index: usize) -> Field<'_> {
        match index {
            0 => Field::Scalar(Cow::Borrowed(&self.value)),
            _ => Field::Node(None),
        }
    }

    fn span(&self) -> Option<Span> {
        Some(self.span)
    }
}

/// A parent with a list, an optional child, a scalar and a field that the
/// flattener is told to ignore.
struct Parent {
    items: Vec<X>,
    single: Option<Box<X>>,
    flag: bool,
    scope: Option<Box<X>>,
}

static PARENT_SCHEMA: NodeSchema = NodeSchema {
    type_name: "Parent",
    fields: &[
        FieldDecl {
            name: "Items",
            kind: <Vec<X> as FieldType>::KIND,
        },
        FieldDecl {
            name: "Single",
            kind: <Option<Box<X>> as FieldType>::KIND,
        },
        FieldDecl {
            name: "Flag",
            kind: <bool as FieldType>::KIND,
        },
        FieldDecl {
            name: "Scope",
            kind: <Option<Box<X>> as FieldType>::KIND,
        },
    ],
};

impl NativeNode for Parent {
    fn schema(&self) -> &'static NodeSchema {
        &PARENT_SCHEMA
    }

    fn field(&self, index: usize) -> Field<'_> {
        match index {
            0 => self.items.to_field(),
            1 => self.single.to_field(),
            2 => self.flag.to_field(),
            3 => self.scope.to_field(),
            _ => Field::Node(None),
        }
    }

    fn span(&self) -> Option<Span> {
        None
    }
}

fn x(value: &str, start: u32) -> X {
    X {
        value: value.to_string(),
        span: Span::new(start, start + value.len() as u32),
    }
}

fn flatten(parent: &Parent) -> GenericNode {
    Flattener::new(&["Scope"])
        .flatten(Some(parent as &dyn NativeNode))
        .unwrap()
}

#[test]
fn test_list_becomes_wrapper_in_order() {
    let parent = Parent {
        items: vec![x("a", 0), x("b", 2), x("c", 4)],
        single: None,
        flag: false,
        scope: None,
    };
    let node = flatten(&parent);

    assert_eq!(node.children.len(), 1);
    let wrapper = &node.children[0];
    assert_eq!(wrapper.internal_type, "ListOfX");
    assert_eq!(wrapper.internal_name.as_deref(), Some("Items"));
    let values: Vec<_> = wrapper
        .children
        .iter()
        .map(|c| c.properties["Value"].as_str())
        .collect();
    assert_eq!(values, ["a", "b", "c"]);
    assert_eq!(wrapper.span(), None);
}

#[test]
fn test_empty_list_and_absent_child_contribute_nothing() {
    let parent = Parent {
        items: Vec::new(),
        single: None,
        flag: true,
        scope: None,
    };
    let node = flatten(&parent);
    assert!(node.children.is_empty());
    assert_eq!(node.properties.get("Flag").map(String::as_str), Some("true"));
}

#[test]
fn test_child_tagged_with_field_name() {
    let parent = Parent {
        items: Vec::new(),
        single: Some(Box::new(x("main", 8))),
        flag: false,
        scope: None,
    };
    let node = flatten(&parent);
    let child = &node.children[0];
    assert_eq!(child.internal_type, "X");
    assert_eq!(child.internal_name.as_deref(), Some("Single"));
    assert_eq!(child.span(), Some(Span::new(8, 12)));
}

#[test]
fn test_ignored_fields_are_skipped() {
    let parent = Parent {
        items: Vec::new(),
        single: None,
        flag: false,
        scope: Some(Box::new(x("s", 0))),
    };
    let node = flatten(&parent);
    assert!(node.children.is_empty());
    assert!(!node.properties.contains_key("Scope"));
}

#[test]
fn test_absent_root_flattens_to_nothing() {
    assert!(Flattener::default().flatten(None).is_none());
}

#[test]
fn test_generic_serialization_shape() {
    let parent = Parent {
        items: vec![x("a", 0)],
        single: None,
        flag: false,
        scope: None,
    };
    let value = serde_json::to_value(flatten(&parent)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "InternalType": "Parent",
            "Properties": { "Flag": "false" },
            "Children": [{
                "InternalType": "ListOfX",
                "InternalName": "Items",
                "Children": [{
                    "InternalType": "X",
                    "Properties": { "Value": "a" },
                    "StartOffset": 0,
                    "EndOffset": 1
                }]
            }]
        })
    );
}

#[test]
fn test_span_clamps_inverted_end() {
    let span = Span::new(5, 2);
    assert_eq!(span, Span::new(5, 5));
    assert!(span.is_empty());
    assert_eq!(Span::new(1, 3).cover(Span::new(2, 8)), Span::new(1, 8));
}
