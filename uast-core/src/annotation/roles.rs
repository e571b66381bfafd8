//! Role tagging from a static type/shape table.

use super::{Encoding, Transformer};
use crate::errors::AnnotationError;
use crate::types::{FxHashMap, SmallVec2};
use crate::uast::{Node, Role};

/// Extra structural condition on a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Always,
    PropertyEquals { key: &'static str, value: &'static str },
}

impl Predicate {
    fn matches(&self, node: &Node) -> bool {
        match self {
            Self::Always => true,
            Self::PropertyEquals { key, value } => node.property(key) == Some(*value),
        }
    }
}

/// Maps a node shape to one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleRule {
    pub internal_type: &'static str,
    pub predicate: Predicate,
    pub role: Role,
}

impl RoleRule {
    pub const fn by_type(internal_type: &'static str, role: Role) -> Self {
        Self {
            internal_type,
            predicate: Predicate::Always,
            role,
        }
    }

    pub const fn by_property(
        internal_type: &'static str,
        key: &'static str,
        value: &'static str,
        role: Role,
    ) -> Self {
        Self {
            internal_type,
            predicate: Predicate::PropertyEquals { key, value },
            role,
        }
    }
}

/// Read-only rule index, keyed by internal type. For a given type the first
/// matching rule, in declaration order, decides the role.
#[derive(Debug, Default)]
pub struct RoleTable {
    by_type: FxHashMap<&'static str, SmallVec2<RoleRule>>,
}

impl RoleTable {
    pub fn new(rules: &[RoleRule]) -> Self {
        let mut by_type: FxHashMap<&'static str, SmallVec2<RoleRule>> = FxHashMap::default();
        for rule in rules {
            by_type.entry(rule.internal_type).or_default().push(*rule);
        }
        Self { by_type }
    }

    pub fn lookup(&self, node: &Node) -> Option<Role> {
        self.by_type
            .get(node.internal_type.as_str())?
            .iter()
            .find(|rule| rule.predicate.matches(node))
            .map(|rule| rule.role)
    }

    pub fn len(&self) -> usize {
        self.by_type.values().map(|rules| rules.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

/// Pass 1. The root always gets [`Role::File`]; every other node gets at
/// most one role from the table.
pub struct RoleTagger {
    table: &'static RoleTable,
}

impl RoleTagger {
    pub fn new(table: &'static RoleTable) -> Self {
        Self { table }
    }
}

impl Transformer for RoleTagger {
    fn name(&self) -> &'static str {
        "roles"
    }

    fn transform(&self, _code: &str, _encoding: Encoding, root: &mut Node) -> Result<(), AnnotationError> {
        root.add_role(Role::File);
        let table = self.table;
        for child in &mut root.children {
            child.walk_mut(&mut |node: &mut Node| {
                if let Some(role) = table.lookup(node) {
                    node.add_role(role);
                }
            });
        }
        Ok(())
    }
}
