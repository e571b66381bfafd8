//! Canonical node model: the uniform tree every driver produces.

pub mod node;
pub mod position;
pub mod role;

pub use node::{Node, Preorder};
pub use position::Position;
pub use role::Role;
