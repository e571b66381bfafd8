//! Go front end for the UAST pipeline.
//!
//! Go source is parsed with tree-sitter-go, lowered into a go/ast-shaped
//! native tree, flattened through static schemas, canonicalized and
//! annotated with roles and positions.

pub mod driver;
pub mod native;
pub mod normalizer;
pub mod transport;

pub use driver::Driver;
pub use native::{GoParser, ParsedFile};
pub use transport::{serve, ServeStats};
