//! Temp-dir fixture for project trees with property files.

use props_core::ProjectNode;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A disposable directory tree for resolution tests.
///
/// Relative paths are resolved against the temp root. `home/` inside
/// the tree stands in for the user's home directory so tests never
/// read the real one.
pub struct PropertyTree {
    temp: TempDir,
}

impl PropertyTree {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        fs::create_dir_all(temp.path().join("home/.gradle")).expect("create home dirs");
        Self { temp }
    }

    /// Absolute path for `rel`, creating the directory.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.temp.path().join(rel);
        fs::create_dir_all(&path).expect("create project dir");
        path
    }

    /// The fixture's stand-in home directory.
    pub fn home(&self) -> PathBuf {
        self.temp.path().join("home")
    }

    /// A root project node for the directory `rel`.
    pub fn node(&self, rel: &str) -> ProjectNode {
        ProjectNode::new(self.dir(rel))
    }

    /// Write a property file at `rel` (path includes the file name),
    /// creating parent directories.
    pub fn write_properties(&self, rel: &str, entries: &[(&str, &str)]) {
        let mut content = String::new();
        for (key, value) in entries {
            content.push_str(key);
            content.push('=');
            content.push_str(value);
            content.push('\n');
        }
        self.write_raw(rel, &content);
    }

    /// Write raw file content at `rel`, creating parent directories.
    pub fn write_raw(&self, rel: &str, content: &str) {
        let path = self.temp.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, content).expect("write fixture file");
    }
}

impl Default for PropertyTree {
    fn default() -> Self {
        Self::new()
    }
}
