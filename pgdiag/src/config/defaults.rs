//! Default configuration values - single source of truth

/// Whether the "Params:" line is included by default
pub const SHOW_PARAMS: bool = true;

/// Whether server positions are annotated with a caret by default
pub const ANNOTATE_POSITION: bool = true;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "PGDIAG";
