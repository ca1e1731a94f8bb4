//! Precedence merge, propagation, and token derivation.
//!
//! The `PropertyResolver` folds the loader's ordered layers into the
//! final property set for a node, with later layers overwriting
//! earlier ones on key collision.

use crate::loader::SourceLoader;
use crate::node::ProjectNode;
use crate::properties::{FilterTokenMap, ResolvedProperties};
use crate::state::{ProcessState, SystemState};
use crate::Result;
use props_fs::SYSTEM_PROP_PREFIX;
use std::collections::HashMap;
use std::path::PathBuf;

/// Resolves the layered properties of project nodes.
///
/// Precedence, lowest to highest: ancestor files → home file → user
/// file → project file → project environment file → environment
/// variables → system properties → command-line overrides.
///
/// Resolution is synchronous and one-shot per node. System-property
/// propagation writes process-global state; callers resolving several
/// nodes in one process must serialize those resolutions themselves.
pub struct PropertyResolver<S: ProcessState = SystemState> {
    /// Home directory searched for the home and user property files.
    /// `None` skips both layers.
    home_dir: Option<PathBuf>,
    pub state: S,
    overrides: HashMap<String, String>,
}

impl PropertyResolver<SystemState> {
    /// A resolver over the real process state and the platform home
    /// directory.
    pub fn new() -> Self {
        Self::with_state(SystemState::new())
    }
}

impl Default for PropertyResolver<SystemState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ProcessState> PropertyResolver<S> {
    /// A resolver over injected process state. Tests pass an in-memory
    /// fake so resolution never touches real global state.
    pub fn with_state(state: S) -> Self {
        Self {
            home_dir: dirs::home_dir(),
            state,
            overrides: HashMap::new(),
        }
    }

    /// Override the home directory (primarily for tests).
    pub fn with_home_dir(mut self, home_dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home_dir.into());
        self
    }

    /// Supply the command-line override map; it always wins.
    pub fn with_overrides(mut self, overrides: HashMap<String, String>) -> Self {
        self.overrides = overrides;
        self
    }

    /// Resolve the final property set for `node`.
    ///
    /// A single left-fold over the ordered layers, then one
    /// propagation pass: every resolved `systemProp.X` key is written
    /// to process system-property state as `X`. Propagating after the
    /// fold guarantees only the winning value escapes — a low-layer
    /// `systemProp.` key overridden higher up never propagates.
    pub fn resolve(&self, node: &ProjectNode) -> Result<ResolvedProperties> {
        let loader = SourceLoader::new(self.home_dir.as_deref(), &self.state, &self.overrides);
        let layers = loader.load(node)?;

        let mut resolved = ResolvedProperties::default();
        for layer in layers {
            tracing::debug!(source = %layer.kind(), count = layer.len(), "Applying layer");
            resolved.apply(layer);
        }

        self.propagate_system_properties(&resolved);
        Ok(resolved)
    }

    /// Resolve `node` and derive its filter tokens.
    pub fn filter_tokens(&self, node: &ProjectNode) -> Result<FilterTokenMap> {
        Ok(self.resolve(node)?.filter_tokens())
    }

    fn propagate_system_properties(&self, resolved: &ResolvedProperties) {
        for (key, value) in resolved.iter() {
            if let Some(name) = key.strip_prefix(SYSTEM_PROP_PREFIX) {
                tracing::debug!(name, "Propagating system property");
                self.state.set_system_property(name, value);
            }
        }
    }
}
