//! Static schema for native nodes.

use std::borrow::Cow;

/// A byte-offset range in the original source. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Build a span; an `end` before `start` is clamped to `start`.
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both.
    pub fn cover(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

/// How a declared field is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A single, possibly absent, child node.
    Node,
    /// An ordered list of child nodes whose declared element type is `element`.
    List { element: &'static str },
    /// A value formatted to a string property.
    Scalar,
}

/// One declared field of a native node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// The static description of a native node kind, built once per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSchema {
    pub type_name: &'static str,
    pub fields: &'static [FieldDecl],
}

impl NodeSchema {
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// The runtime value of one declared field.
pub enum Field<'a> {
    Node(Option<&'a dyn NativeNode>),
    List(Vec<&'a dyn NativeNode>),
    Scalar(Cow<'a, str>),
}

/// A node of a native parse tree.
///
/// `field(i)` must return the value of `schema().fields[i]`.
pub trait NativeNode {
    fn schema(&self) -> &'static NodeSchema;

    fn field(&self, index: usize) -> Field<'_>;

    /// Byte span as resolved by the native parser.
    fn span(&self) -> Option<Span>;
}

impl<T: NativeNode + ?Sized> NativeNode for Box<T> {
    fn schema(&self) -> &'static NodeSchema {
        (**self).schema()
    }

    fn field(&self, index: usize) -> Field<'_> {
        (**self).field(index)
    }

    fn span(&self) -> Option<Span> {
        (**self).span()
    }
}

/// Declared type name of a node type, used to name list wrappers.
/// Interface categories (an `Expr` enum, say) carry the category name.
pub trait NodeType {
    const TYPE_NAME: &'static str;
}

/// One level of pointer indirection is transparent.
impl<T: NodeType + ?Sized> NodeType for Box<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;
}

/// Maps a Rust field type to its schema kind and runtime value.
pub trait FieldType {
    const KIND: FieldKind;

    fn to_field(&self) -> Field<'_>;
}

impl<T: NativeNode + NodeType> FieldType for Box<T> {
    const KIND: FieldKind = FieldKind::Node;

    fn to_field(&self) -> Field<'_> {
        Field::Node(Some(&**self))
    }
}

impl<T: NativeNode + NodeType> FieldType for Option<Box<T>> {
    const KIND: FieldKind = FieldKind::Node;

    fn to_field(&self) -> Field<'_> {
        Field::Node(self.as_deref().map(|n| n as &dyn NativeNode))
    }
}

impl<T: NativeNode + NodeType> FieldType for Vec<T> {
    const KIND: FieldKind = FieldKind::List {
        element: T::TYPE_NAME,
    };

    fn to_field(&self) -> Field<'_> {
        Field::List(self.iter().map(|n| n as &dyn NativeNode).collect())
    }
}

impl FieldType for String {
    const KIND: FieldKind = FieldKind::Scalar;

    fn to_field(&self) -> Field<'_> {
        Field::Scalar(Cow::Borrowed(self))
    }
}

impl FieldType for bool {
    const KIND: FieldKind = FieldKind::Scalar;

    fn to_field(&self) -> Field<'_> {
        Field::Scalar(Cow::Borrowed(if *self { "true" } else { "false" }))
    }
}
