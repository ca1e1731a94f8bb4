//! Error types for props-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the CLI user
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A -P or -D argument missing the `=` separator
    #[error("Invalid `{arg}`: expected KEY=VALUE")]
    InvalidPair { arg: String },

    /// Resolution error from props-core
    #[error(transparent)]
    Core(#[from] props_core::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
