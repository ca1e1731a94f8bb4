//! Error types for props-core

/// Result type for props-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in props-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A property a caller declared required is absent after the merge
    #[error("Required property `{key}` is not set")]
    RequiredProperty { key: String },

    /// Property-file error from props-fs
    #[error(transparent)]
    Fs(#[from] props_fs::Error),
}
