//! Reserved names for property discovery and propagation.
//!
//! These literals are a compatibility surface: other tooling matches on
//! them byte-for-byte, so they must never be localized or re-cased.

/// Base property file name looked up in every project directory,
/// the home directory, and the user config directory.
pub const PROPERTIES_FILE: &str = "gradle.properties";

/// Subdirectory of the home directory holding the user-global
/// property file.
pub const USER_CONFIG_DIR: &str = ".gradle";

/// Environment variables carrying this prefix contribute project
/// properties under the stripped name.
pub const ENV_PROJECT_PREFIX: &str = "ORG_GRADLE_PROJECT_";

/// System properties carrying this dotted prefix contribute project
/// properties under the stripped name.
pub const SYSTEM_PROJECT_PREFIX: &str = "org.gradle.project.";

/// Resolved properties carrying this prefix are written to
/// process-wide system-property state under the stripped name and are
/// excluded from filter tokens.
pub const SYSTEM_PROP_PREFIX: &str = "systemProp.";

/// File name of the environment-specific override file for a given
/// environment name, e.g. `gradle-staging.properties`.
pub fn env_properties_file_name(environment: &str) -> String {
    format!("gradle-{environment}.properties")
}
