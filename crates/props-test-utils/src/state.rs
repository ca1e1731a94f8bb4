//! In-memory process state for resolution tests.

use props_core::ProcessState;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// A [`ProcessState`] over in-memory maps.
///
/// Keeps resolution tests away from real environment variables and the
/// process-wide system-property store, and records propagation writes
/// so tests can assert on them.
#[derive(Debug, Default)]
pub struct FakeProcessState {
    env: HashMap<String, String>,
    system: Mutex<HashMap<String, String>>,
}

impl FakeProcessState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn with_system_property(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.system
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        self
    }

    /// Read back one system property, including propagated writes.
    pub fn system_property(&self, key: &str) -> Option<String> {
        self.system
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl ProcessState for FakeProcessState {
    fn env_vars(&self) -> HashMap<String, String> {
        self.env.clone()
    }

    fn system_properties(&self) -> HashMap<String, String> {
        self.system
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_system_property(&self, key: &str, value: &str) {
        self.system
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}
