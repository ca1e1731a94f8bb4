//! Source discovery: the ordered layers available to a project node.
//!
//! The loader only discovers and parses sources; it never picks
//! winners. Layers come back ordered lowest to highest authority and
//! the resolver's fold turns that order into precedence.

use crate::layer::{PropertyLayer, SourceKind};
use crate::node::ProjectNode;
use crate::state::ProcessState;
use crate::Result;
use props_fs::{
    ENV_PROJECT_PREFIX, PROPERTIES_FILE, SYSTEM_PROJECT_PREFIX, USER_CONFIG_DIR,
    env_properties_file_name, load_properties,
};
use std::collections::HashMap;
use std::path::Path;

/// Discovers the ordered property layers for one node.
pub struct SourceLoader<'a, S: ProcessState> {
    home_dir: Option<&'a Path>,
    state: &'a S,
    overrides: &'a HashMap<String, String>,
}

impl<'a, S: ProcessState> SourceLoader<'a, S> {
    pub fn new(
        home_dir: Option<&'a Path>,
        state: &'a S,
        overrides: &'a HashMap<String, String>,
    ) -> Self {
        Self {
            home_dir,
            state,
            overrides,
        }
    }

    /// Produce every layer for `node`, lowest authority first:
    /// ancestor files (root-most ancestor first), home file, user
    /// file, project file, project environment file, prefixed
    /// environment variables, prefixed system properties, command-line
    /// overrides. Missing files yield empty layers.
    pub fn load(&self, node: &ProjectNode) -> Result<Vec<PropertyLayer>> {
        let mut layers = Vec::new();

        self.collect_ancestor_layers(node, &mut layers)?;

        if let Some(home) = self.home_dir {
            layers.push(file_layer(SourceKind::HomeFile, &home.join(PROPERTIES_FILE))?);
            layers.push(file_layer(
                SourceKind::UserFile,
                &home.join(USER_CONFIG_DIR).join(PROPERTIES_FILE),
            )?);
        } else {
            tracing::debug!("No home directory — skipping home and user files");
            layers.push(PropertyLayer::empty(SourceKind::HomeFile));
            layers.push(PropertyLayer::empty(SourceKind::UserFile));
        }

        layers.push(file_layer(
            SourceKind::ProjectFile,
            &node.dir().join(PROPERTIES_FILE),
        )?);
        layers.push(env_file_layer(SourceKind::ProjectEnvFile, node)?);

        layers.push(prefixed_layer(
            SourceKind::EnvironmentVar,
            self.state.env_vars(),
            ENV_PROJECT_PREFIX,
        ));
        layers.push(prefixed_layer(
            SourceKind::SystemProp,
            self.state.system_properties(),
            SYSTEM_PROJECT_PREFIX,
        ));

        layers.push(PropertyLayer::new(
            SourceKind::CommandLine,
            self.overrides.clone(),
        ));

        Ok(layers)
    }

    /// Ancestor file layers, root-most ancestor first so nearer
    /// ancestors override farther ones. Only the ancestors' own
    /// project files count; home and user files are the same files
    /// this node reads once itself.
    fn collect_ancestor_layers(
        &self,
        node: &ProjectNode,
        layers: &mut Vec<PropertyLayer>,
    ) -> Result<()> {
        if let Some(parent) = node.parent() {
            self.collect_ancestor_layers(parent, layers)?;
            layers.push(file_layer(
                SourceKind::ParentFile,
                &parent.dir().join(PROPERTIES_FILE),
            )?);
            layers.push(env_file_layer(SourceKind::ParentEnvFile, parent)?);
        }
        Ok(())
    }
}

fn file_layer(kind: SourceKind, path: &Path) -> Result<PropertyLayer> {
    match load_properties(path)? {
        Some(entries) => Ok(PropertyLayer::new(kind, entries)),
        None => Ok(PropertyLayer::empty(kind)),
    }
}

/// The node's environment-specific file layer; empty when the node has
/// no environment name.
fn env_file_layer(kind: SourceKind, node: &ProjectNode) -> Result<PropertyLayer> {
    match node.environment() {
        Some(environment) => file_layer(
            kind,
            &node.dir().join(env_properties_file_name(environment)),
        ),
        None => Ok(PropertyLayer::empty(kind)),
    }
}

/// Keep only entries whose key starts with `prefix`, stripped.
fn prefixed_layer(
    kind: SourceKind,
    source: HashMap<String, String>,
    prefix: &str,
) -> PropertyLayer {
    let entries = source
        .into_iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(prefix)
                .map(|stripped| (stripped.to_string(), value))
        })
        .collect();
    PropertyLayer::new(kind, entries)
}
