//! Native Go front end: tree-sitter-go lowered into a go/ast-shaped tree.

mod macros;

pub mod ast;
pub mod diagnostics;
pub mod lower;
pub mod parser;
pub mod token;

pub use ast::File;
pub use diagnostics::Diagnostic;
pub use parser::{GoParser, ParsedFile};
pub use token::{ChanDir, Token};
