//! Generic intermediate node: the flattener's output shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Span;

/// A language-neutral summary of one native node.
///
/// Serializes to the nested key/value form the canonicalizer consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenericNode {
    pub internal_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_name: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<GenericNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_offset: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<u32>,
}

impl GenericNode {
    pub fn new(internal_type: impl Into<String>) -> Self {
        Self {
            internal_type: internal_type.into(),
            ..Self::default()
        }
    }

    pub fn set_span(&mut self, span: Span) {
        self.start_offset = Some(span.start);
        self.end_offset = Some(span.end);
    }

    pub fn span(&self) -> Option<Span> {
        match (self.start_offset, self.end_offset) {
            (Some(start), Some(end)) => Some(Span::new(start, end)),
            _ => None,
        }
    }

    pub fn child(&self, internal_name: &str) -> Option<&GenericNode> {
        self.children
            .iter()
            .find(|c| c.internal_name.as_deref() == Some(internal_name))
    }
}
