//! Properties-file format layer for Property Manager
//!
//! Provides the minimal `key=value` file format used by every
//! file-based property source, plus the reserved file names and key
//! prefixes the resolver discovers sources by.

pub mod constants;
pub mod error;
pub mod file;
pub mod format;

pub use constants::{
    ENV_PROJECT_PREFIX, PROPERTIES_FILE, SYSTEM_PROJECT_PREFIX, SYSTEM_PROP_PREFIX,
    USER_CONFIG_DIR, env_properties_file_name,
};
pub use error::{Error, Result};
pub use file::load_properties;
pub use format::parse_properties;
