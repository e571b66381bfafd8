//! Canonicalizer: builds canonical nodes from nested key/value structures.

pub mod to_node;

pub use to_node::ToNode;
