//! Flattener: turns a native parse tree into generic intermediate nodes.
//!
//! Native node kinds describe themselves through a static [`NodeSchema`]
//! (which fields are child pointers, child lists, or scalars). The flattener
//! reads only that schema, so it knows nothing about any particular language.

pub mod flattener;
pub mod generic;
pub mod schema;

pub use flattener::Flattener;
pub use generic::GenericNode;
pub use schema::{Field, FieldDecl, FieldKind, FieldType, NativeNode, NodeSchema, NodeType, Span};
