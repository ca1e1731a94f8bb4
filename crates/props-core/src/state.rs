//! Process-global state behind an injectable accessor.
//!
//! Environment variables and system properties are genuinely global
//! mutable state. Resolution reads them through the [`ProcessState`]
//! trait so tests can substitute in-memory state, and so callers that
//! resolve several nodes in one process can serialize access
//! explicitly — the engine itself takes no locks across resolutions,
//! and concurrent propagation writes are last-write-wins.

use std::collections::HashMap;

/// Accessor for the process-global state a resolution reads and
/// writes.
pub trait ProcessState {
    /// Snapshot of the process environment variables.
    fn env_vars(&self) -> HashMap<String, String>;

    /// Snapshot of the current system properties.
    fn system_properties(&self) -> HashMap<String, String>;

    /// Write one system property, overwriting any existing value.
    fn set_system_property(&self, key: &str, value: &str);
}

/// The real process state: `std::env` for environment variables and
/// the process-wide [`system_properties`] store.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemState;

impl SystemState {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessState for SystemState {
    fn env_vars(&self) -> HashMap<String, String> {
        std::env::vars().collect()
    }

    fn system_properties(&self) -> HashMap<String, String> {
        system_properties::snapshot()
    }

    fn set_system_property(&self, key: &str, value: &str) {
        system_properties::set(key, value);
    }
}

/// Process-wide system-property store.
///
/// The operating system has no equivalent of JVM-style system
/// properties, so the process owns them: hosts seed the store at
/// startup (e.g. from `-D` definitions) and resolution propagates
/// `systemProp.`-prefixed keys into it.
pub mod system_properties {
    use std::collections::HashMap;
    use std::sync::{Mutex, OnceLock, PoisonError};

    static STORE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();

    fn store() -> &'static Mutex<HashMap<String, String>> {
        STORE.get_or_init(Mutex::default)
    }

    /// Set one system property, overwriting any existing value.
    pub fn set(key: &str, value: &str) {
        store()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    /// Read one system property.
    pub fn get(key: &str) -> Option<String> {
        store()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Snapshot of all system properties.
    pub fn snapshot() -> HashMap<String, String> {
        store()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Seed the store from an iterator of pairs, e.g. parsed `-D`
    /// definitions.
    pub fn seed<I, K, V>(entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = store().lock().unwrap_or_else(PoisonError::into_inner);
        for (key, value) in entries {
            map.insert(key.into(), value.into());
        }
    }
}
