//! uast-core: language-agnostic half of a UAST driver.
//!
//! - Flatten: schema-driven flattening of native parse trees
//! - ToNode: canonicalization of nested key/value structures
//! - Annotation: ordered role and position passes
//! - Protocol: request/response shapes
//! - Errors, config and tracing shared by drivers

pub mod annotation;
pub mod config;
pub mod constants;
pub mod errors;
pub mod flatten;
pub mod protocol;
pub mod tonode;
pub mod tracing;
pub mod types;
pub mod uast;

pub use annotation::{Encoding, Pipeline, RoleRule, RoleTable, Transformer};
pub use config::UastConfig;
pub use errors::{DriverError, UastErrorCode};
pub use flatten::{Flattener, GenericNode, NativeNode};
pub use protocol::{Request, Response, Status};
pub use tonode::ToNode;
pub use uast::{Node, Position, Role};
