//! Schema-driven flattening.

use super::{Field, FieldKind, GenericNode, NativeNode};
use crate::constants::LIST_TYPE_PREFIX;
use crate::types::FxHashSet;

/// Flattens native nodes using their static schemas.
///
/// Holds only read-only configuration, so one instance can serve any
/// number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Flattener {
    ignored_fields: FxHashSet<&'static str>,
}

impl Flattener {
    /// `ignored_fields` are skipped on every node kind.
    pub fn new(ignored_fields: &[&'static str]) -> Self {
        Self {
            ignored_fields: ignored_fields.iter().copied().collect(),
        }
    }

    pub fn is_ignored(&self, field: &str) -> bool {
        self.ignored_fields.contains(field)
    }

    /// Flatten `node` and its descendants. An absent node yields no node.
    pub fn flatten(&self, node: Option<&dyn NativeNode>) -> Option<GenericNode> {
        node.map(|n| self.flatten_node(n))
    }

    fn flatten_node(&self, node: &dyn NativeNode) -> GenericNode {
        let schema = node.schema();
        let mut out = GenericNode::new(schema.type_name);
        if let Some(span) = node.span() {
            out.set_span(span);
        }

        for (index, decl) in schema.fields.iter().enumerate() {
            if self.is_ignored(decl.name) {
                continue;
            }
            match node.field(index) {
                Field::Node(Some(child)) => {
                    let mut child = self.flatten_node(child);
                    child.internal_name = Some(decl.name.to_string());
                    out.children.push(child);
                }
                Field::Node(None) => {}
                Field::List(items) => {
                    if items.is_empty() {
                        continue;
                    }
                    let element = match decl.kind {
                        FieldKind::List { element } => element,
                        _ => items[0].schema().type_name,
                    };
                    let mut wrapper = GenericNode::new(format!("{LIST_TYPE_PREFIX}{element}"));
                    wrapper.internal_name = Some(decl.name.to_string());
                    wrapper.children = items.into_iter().map(|n| self.flatten_node(n)).collect();
                    out.children.push(wrapper);
                }
                Field::Scalar(value) => {
                    out.properties.insert(decl.name.to_string(), value.into_owned());
                }
            }
        }

        out
    }
}
