//! `ToNode`: a declarative description of how an object maps to a [`Node`].

use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::*;
use crate::errors::{ToNodeError, UastErrorCode};
use crate::uast::{Node, Position};

/// Key layout and merge rules for canonicalization.
///
/// Reserved keys (type, name, offsets, positions, roles) are extracted first.
/// When `properties_key` is set and holds an object, its entries are merged
/// into the node's own keys unless the node already defines them. Remaining
/// object values become one child, arrays of objects become one child per
/// element, and scalars become properties.
#[derive(Debug, Clone)]
pub struct ToNode {
    pub internal_type_key: &'static str,
    pub internal_name_key: &'static str,
    pub offset_key: &'static str,
    pub end_offset_key: &'static str,
    /// Children under this key keep their own internal name.
    pub children_key: &'static str,
    pub properties_key: Option<&'static str>,
    /// When false, the top-level object wraps the root under a single key.
    pub top_level_is_root_node: bool,
}

impl Default for ToNode {
    fn default() -> Self {
        Self {
            internal_type_key: KEY_INTERNAL_TYPE,
            internal_name_key: KEY_INTERNAL_NAME,
            offset_key: KEY_START_OFFSET,
            end_offset_key: KEY_END_OFFSET,
            children_key: KEY_CHILDREN,
            properties_key: None,
            top_level_is_root_node: true,
        }
    }
}

impl ToNode {
    /// Canonicalize any serializable value, typically a flattened tree.
    pub fn to_node_from<T: Serialize + ?Sized>(&self, value: &T) -> Result<Node, ToNodeError> {
        let value = serde_json::to_value(value)?;
        self.to_node(&value)
    }

    /// Canonicalize `value`. Errors on the root abort the conversion; errors
    /// below the root drop only the offending subtree.
    pub fn to_node(&self, value: &Value) -> Result<Node, ToNodeError> {
        let obj = as_object(value)?;
        if self.top_level_is_root_node {
            return self.build(obj);
        }
        if obj.len() != 1 {
            return Err(ToNodeError::AmbiguousRoot { count: obj.len() });
        }
        match obj.values().next() {
            Some(root) => self.build(as_object(root)?),
            None => Err(ToNodeError::AmbiguousRoot { count: 0 }),
        }
    }

    fn is_reserved(&self, key: &str) -> bool {
        key == self.internal_type_key
            || key == self.internal_name_key
            || key == self.offset_key
            || key == self.end_offset_key
            || key == KEY_START_POSITION
            || key == KEY_END_POSITION
            || key == KEY_ROLES
            || Some(key) == self.properties_key
    }

    fn build(&self, obj: &Map<String, Value>) -> Result<Node, ToNodeError> {
        let mut node = Node::default();

        if let Some(v) = obj.get(self.internal_type_key) {
            node.internal_type = scalar_string(self.internal_type_key, v)?.unwrap_or_default();
        }
        if let Some(v) = obj.get(self.internal_name_key) {
            node.internal_name = scalar_string(self.internal_name_key, v)?.unwrap_or_default();
        }

        let start = self.offset(obj, self.offset_key, KEY_START_POSITION)?;
        let end = self.offset(obj, self.end_offset_key, KEY_END_POSITION)?;
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(ToNodeError::InvalidSpan { start, end });
            }
        }
        node.start_position = start.map(Position::at);
        node.end_position = end.map(Position::at);

        let mut entries: Vec<(&str, &Value)> = obj
            .iter()
            .filter(|(k, _)| !self.is_reserved(k))
            .map(|(k, v)| (k.as_str(), v))
            .collect();

        if let Some(props_key) = self.properties_key {
            match obj.get(props_key) {
                Some(Value::Object(props)) => {
                    for (k, v) in props {
                        if obj.contains_key(k) {
                            tracing::debug!(key = %k, "ignoring already defined property");
                        } else if self.is_reserved(k) {
                            tracing::debug!(key = %k, "ignoring reserved key inside properties");
                        } else {
                            entries.push((k.as_str(), v));
                        }
                    }
                }
                Some(other) => entries.push((props_key, other)),
                None => {}
            }
        }

        for (key, value) in entries {
            self.classify(&mut node, key, value)?;
        }

        Ok(node)
    }

    fn classify(&self, node: &mut Node, key: &str, value: &Value) -> Result<(), ToNodeError> {
        match value {
            Value::Null => {}
            Value::String(s) => self.set_property(node, key, s.clone()),
            Value::Number(n) => self.set_property(node, key, n.to_string()),
            Value::Bool(b) => self.set_property(node, key, b.to_string()),
            Value::Object(child) => {
                if let Some(child) = self.build_child(key, child) {
                    node.children.push(child);
                }
            }
            Value::Array(items) => {
                if let Some(bad) = items.iter().find(|v| !v.is_object()) {
                    return Err(ToNodeError::UnsupportedValue {
                        key: key.to_string(),
                        found: kind_of(bad),
                    });
                }
                for item in items.iter().filter_map(Value::as_object) {
                    if let Some(child) = self.build_child(key, item) {
                        node.children.push(child);
                    }
                }
            }
        }
        Ok(())
    }

    fn build_child(&self, key: &str, obj: &Map<String, Value>) -> Option<Node> {
        match self.build(obj) {
            Ok(mut child) => {
                if key != self.children_key {
                    child.internal_name = key.to_string();
                }
                Some(child)
            }
            Err(e) => {
                tracing::warn!(
                    key = %key,
                    code = e.error_code(),
                    error = %e,
                    "dropping child that failed to build"
                );
                None
            }
        }
    }

    fn set_property(&self, node: &mut Node, key: &str, value: String) {
        if let Err(e) = node.insert_property(key, value) {
            tracing::debug!(key = %key, error = %e, "ignoring already defined property");
        }
    }

    fn offset(
        &self,
        obj: &Map<String, Value>,
        key: &str,
        position_key: &str,
    ) -> Result<Option<u32>, ToNodeError> {
        if let Some(v) = obj.get(key) {
            if !v.is_null() {
                return parse_offset(key, v).map(Some);
            }
        }
        match obj.get(position_key) {
            Some(Value::Object(pos)) => match pos.get(KEY_OFFSET) {
                Some(v) => parse_offset(position_key, v).map(Some),
                None => Ok(None),
            },
            Some(Value::Null) | None => Ok(None),
            Some(other) => Err(ToNodeError::InvalidOffset {
                key: position_key.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, ToNodeError> {
    value.as_object().ok_or(ToNodeError::NotAnObject {
        found: kind_of(value),
    })
}

fn parse_offset(key: &str, value: &Value) -> Result<u32, ToNodeError> {
    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ToNodeError::InvalidOffset {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn scalar_string(key: &str, value: &Value) -> Result<Option<String>, ToNodeError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(ToNodeError::UnsupportedValue {
            key: key.to_string(),
            found: kind_of(other),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
