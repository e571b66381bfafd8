//! Shared constants for the UAST pipeline.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default maximum request content size in bytes (16 MiB).
pub const DEFAULT_MAX_CONTENT_SIZE: u64 = 16 * 1024 * 1024;

/// Default accepted language name.
pub const DEFAULT_LANGUAGE: &str = "go";

/// Default tracing filter when neither `UAST_LOG` nor `log.filter` is set.
pub const DEFAULT_LOG_FILTER: &str = "uast=info";

/// Environment variable holding per-subsystem log directives.
pub const LOG_ENV_VAR: &str = "UAST_LOG";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "uast.toml";

// ---- Serialization keys ----

pub const KEY_INTERNAL_TYPE: &str = "InternalType";
pub const KEY_INTERNAL_NAME: &str = "InternalName";
pub const KEY_PROPERTIES: &str = "Properties";
pub const KEY_CHILDREN: &str = "Children";
pub const KEY_ROLES: &str = "Roles";
pub const KEY_START_OFFSET: &str = "StartOffset";
pub const KEY_END_OFFSET: &str = "EndOffset";
pub const KEY_START_POSITION: &str = "StartPosition";
pub const KEY_END_POSITION: &str = "EndPosition";
pub const KEY_OFFSET: &str = "Offset";

/// Prefix of the synthetic wrapper type produced for child lists.
pub const LIST_TYPE_PREFIX: &str = "ListOf";
