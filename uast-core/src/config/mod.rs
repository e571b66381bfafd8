//! Configuration system.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod driver_config;
pub mod log_config;
pub mod uast_config;

pub use driver_config::DriverConfig;
pub use log_config::LogConfig;
pub use uast_config::{CliOverrides, UastConfig};
