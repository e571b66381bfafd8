//! Error handling for the UAST pipeline.
//! One error enum per subsystem, `thiserror` only.

pub mod annotation_error;
pub mod config_error;
pub mod driver_error;
pub mod error_code;
pub mod parse_error;
pub mod tonode_error;

pub use annotation_error::AnnotationError;
pub use config_error::ConfigError;
pub use driver_error::DriverError;
pub use error_code::UastErrorCode;
pub use parse_error::ParseError;
pub use tonode_error::ToNodeError;
