//! The canonical node.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{Position, Role};
use crate::constants::*;
use crate::errors::ToNodeError;

/// A node of the canonical tree.
///
/// Invariants: property keys are unique and a second write to a key is
/// rejected; roles are only written by annotation passes; children keep
/// source order; a node without offsets has no position at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub internal_type: String,
    /// Name of the native field this node came from, empty when unknown.
    pub internal_name: String,
    pub roles: Vec<Role>,
    properties: BTreeMap<String, String>,
    pub children: Vec<Node>,
    pub start_position: Option<Position>,
    pub end_position: Option<Position>,
}

impl Node {
    pub fn new(internal_type: impl Into<String>) -> Self {
        Self {
            internal_type: internal_type.into(),
            ..Self::default()
        }
    }

    pub fn with_internal_name(mut self, name: impl Into<String>) -> Self {
        self.internal_name = name.into();
        self
    }

    /// Builder form of [`Node::insert_property`]; the first write to a key wins.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self.insert_property(key, value);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_offsets(mut self, start: u32, end: u32) -> Self {
        self.start_position = Some(Position::at(start));
        self.end_position = Some(Position::at(end));
        self
    }

    /// Insert a property. Rejects keys that are already present.
    pub fn insert_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ToNodeError> {
        let key = key.into();
        if self.properties.contains_key(&key) {
            return Err(ToNodeError::DuplicateProperty { key });
        }
        self.properties.insert(key, value.into());
        Ok(())
    }

    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Append `role` unless already present. Returns whether it was added.
    pub fn add_role(&mut self, role: Role) -> bool {
        if self.has_role(role) {
            return false;
        }
        self.roles.push(role);
        true
    }

    /// Pre-order traversal over this node and its descendants.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }

    /// Visit this node and every descendant mutably, parents first.
    pub fn walk_mut<F: FnMut(&mut Node)>(&mut self, f: &mut F) {
        f(self);
        for child in &mut self.children {
            child.walk_mut(f);
        }
    }

    /// Drop everything the annotation pipeline computes: roles and line/column.
    pub fn clear_annotations(&mut self) {
        self.walk_mut(&mut |node: &mut Node| {
            node.roles.clear();
            for pos in [&mut node.start_position, &mut node.end_position]
                .into_iter()
                .flatten()
            {
                *pos = Position::at(pos.offset);
            }
        });
    }
}

/// Iterator returned by [`Node::preorder`].
pub struct Preorder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(KEY_INTERNAL_TYPE, &self.internal_type)?;
        if !self.internal_name.is_empty() {
            map.serialize_entry(KEY_INTERNAL_NAME, &self.internal_name)?;
        }
        if !self.roles.is_empty() {
            map.serialize_entry(KEY_ROLES, &self.roles)?;
        }
        if !self.properties.is_empty() {
            map.serialize_entry(KEY_PROPERTIES, &self.properties)?;
        }
        if !self.children.is_empty() {
            map.serialize_entry(KEY_CHILDREN, &self.children)?;
        }
        if let Some(start) = self.start_position {
            map.serialize_entry(KEY_START_OFFSET, &start.offset)?;
            if start.is_resolved() {
                map.serialize_entry(KEY_START_POSITION, &start)?;
            }
        }
        if let Some(end) = self.end_position {
            map.serialize_entry(KEY_END_OFFSET, &end.offset)?;
            if end.is_resolved() {
                map.serialize_entry(KEY_END_POSITION, &end)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_property_rejected() {
        let mut node = Node::new("BasicLit");
        node.insert_property("Kind", "INT").unwrap();
        let err = node.insert_property("Kind", "STRING").unwrap_err();
        assert!(matches!(err, ToNodeError::DuplicateProperty { ref key } if key == "Kind"));
        assert_eq!(node.property("Kind"), Some("INT"));
    }

    #[test]
    fn test_serialization_omits_empty_fields() {
        let node = Node::new("Ident");
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value, serde_json::json!({ "InternalType": "Ident" }));
    }

    #[test]
    fn test_serialization_expands_resolved_positions() {
        let mut node = Node::new("Ident")
            .with_internal_name("Name")
            .with_property("Name", "main")
            .with_offsets(8, 12);
        node.add_role(Role::Identifier);
        node.start_position = Some(Position { offset: 8, line: 1, col: 9 });

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "InternalType": "Ident",
                "InternalName": "Name",
                "Roles": ["Identifier"],
                "Properties": { "Name": "main" },
                "StartOffset": 8,
                "StartPosition": { "Offset": 8, "Line": 1, "Col": 9 },
                "EndOffset": 12,
            })
        );
    }

    #[test]
    fn test_preorder_visits_parents_first() {
        let tree = Node::new("A")
            .with_child(Node::new("B").with_child(Node::new("C")))
            .with_child(Node::new("D"));
        let order: Vec<&str> = tree.preorder().map(|n| n.internal_type.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_add_role_is_idempotent() {
        let mut node = Node::new("Ident");
        assert!(node.add_role(Role::Identifier));
        assert!(!node.add_role(Role::Identifier));
        assert_eq!(node.roles, vec![Role::Identifier]);
    }
}
