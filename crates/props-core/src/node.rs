//! Project nodes: the unit of property resolution.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One node in the host tool's project tree.
///
/// The resolver only reads a node and its ancestors; the host owns the
/// tree itself. A node's environment name selects its
/// `gradle-<name>.properties` override file; without one, that layer
/// is empty.
#[derive(Debug, Clone)]
pub struct ProjectNode {
    dir: PathBuf,
    environment: Option<String>,
    parent: Option<Arc<ProjectNode>>,
}

impl ProjectNode {
    /// A root node for the project directory `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            environment: None,
            parent: None,
        }
    }

    /// Set the environment name selecting environment-specific
    /// override files.
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// A child node under this one. The child inherits this node's
    /// file-derived properties as its lowest-precedence layers and
    /// this node's environment name by default.
    pub fn child(&self, dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            environment: self.environment.clone(),
            parent: Some(Arc::new(self.clone())),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    pub fn parent(&self) -> Option<&ProjectNode> {
        self.parent.as_deref()
    }
}
