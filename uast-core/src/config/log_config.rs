//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Default filter used when `UAST_LOG` is not set.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directives, e.g. `uast_core=debug`.
    pub filter: Option<String>,
}
