//! Annotation pipeline: ordered, idempotent passes over a canonical tree.
//!
//! Built-in passes run first: role tagging, then position enrichment.
//! Language rule sets may append further passes with [`Pipeline::register`].

pub mod encoding;
pub mod positions;
pub mod roles;
pub mod transformer;

pub use encoding::Encoding;
pub use positions::{LineIndex, PositionEnricher};
pub use roles::{Predicate, RoleRule, RoleTable, RoleTagger};
pub use transformer::{Pipeline, Transformer};
