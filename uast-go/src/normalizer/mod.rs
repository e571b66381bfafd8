//! Go normalization tables: ignored fields, canonicalizer layout and roles.
//!
//! Everything here is built once on first use and read-only afterwards.

pub mod roles;

use once_cell::sync::Lazy;
use uast_core::annotation::{Pipeline, RoleTable};
use uast_core::constants::KEY_PROPERTIES;
use uast_core::flatten::Flattener;
use uast_core::tonode::ToNode;

pub use roles::ROLE_RULES;

/// Native fields never flattened. `Imports` duplicates specs reachable
/// through `Decls`; the others are resolver state.
pub const IGNORED_FIELDS: &[&str] = &["Imports", "Scope", "Obj", "Unresolved"];

pub static FLATTENER: Lazy<Flattener> = Lazy::new(|| Flattener::new(IGNORED_FIELDS));

pub static ROLE_TABLE: Lazy<RoleTable> = Lazy::new(|| RoleTable::new(ROLE_RULES));

/// Canonicalizer layout for flattened Go trees.
pub fn to_node() -> ToNode {
    ToNode {
        properties_key: Some(KEY_PROPERTIES),
        ..ToNode::default()
    }
}

/// Annotation passes in order: roles, then positions.
pub fn pipeline() -> Pipeline {
    Pipeline::new(&ROLE_TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignore_set_covers_resolver_fields() {
        for field in ["Imports", "Scope", "Obj", "Unresolved"] {
            assert!(FLATTENER.is_ignored(field), "{field}");
        }
        assert!(!FLATTENER.is_ignored("Decls"));
    }

    #[test]
    fn test_pipeline_order() {
        assert_eq!(pipeline().pass_names(), ["roles", "positions"]);
    }
}
