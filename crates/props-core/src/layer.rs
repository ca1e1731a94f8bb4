//! Property layers: one source's contribution before precedence.

use std::collections::HashMap;

/// The source a property layer was discovered from, lowest to highest
/// authority. Precedence is decided by the merge order in the
/// resolver, never by anything inside a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SourceKind {
    /// An ancestor project's own property file
    ParentFile,
    /// An ancestor project's environment-specific property file
    ParentEnvFile,
    /// The property file at the home directory root
    HomeFile,
    /// The property file in the user config directory
    UserFile,
    /// The project's own property file
    ProjectFile,
    /// The project's environment-specific property file
    ProjectEnvFile,
    /// Prefixed process environment variables
    EnvironmentVar,
    /// Prefixed process system properties
    SystemProp,
    /// Caller-supplied command-line overrides (highest)
    CommandLine,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::ParentFile => write!(f, "parent file"),
            SourceKind::ParentEnvFile => write!(f, "parent environment file"),
            SourceKind::HomeFile => write!(f, "home file"),
            SourceKind::UserFile => write!(f, "user file"),
            SourceKind::ProjectFile => write!(f, "project file"),
            SourceKind::ProjectEnvFile => write!(f, "project environment file"),
            SourceKind::EnvironmentVar => write!(f, "environment variable"),
            SourceKind::SystemProp => write!(f, "system property"),
            SourceKind::CommandLine => write!(f, "command line"),
        }
    }
}

/// One source's key/value contribution, tagged with where it came
/// from. Immutable once created; entry order inside a layer carries no
/// meaning.
#[derive(Debug, Clone)]
pub struct PropertyLayer {
    kind: SourceKind,
    entries: HashMap<String, String>,
}

impl PropertyLayer {
    pub fn new(kind: SourceKind, entries: HashMap<String, String>) -> Self {
        Self { kind, entries }
    }

    /// A layer contributing nothing, e.g. a missing file.
    pub fn empty(kind: SourceKind) -> Self {
        Self::new(kind, HashMap::new())
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    pub(crate) fn into_entries(self) -> HashMap<String, String> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
