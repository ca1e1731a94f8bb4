//! Resolved property set and derived filter tokens.

use crate::layer::PropertyLayer;
use crate::{Error, Result};
use props_fs::SYSTEM_PROP_PREFIX;
use serde::Serialize;
use std::collections::BTreeMap;

/// Tokens exposed for text substitution in resource files: every
/// resolved property under its own name, except `systemProp.`-prefixed
/// keys, which exist for propagation and never appear here.
pub type FilterTokenMap = BTreeMap<String, String>;

/// The final, precedence-applied property set for one project node.
///
/// Built by a single merge pass and never observable half-merged.
/// Backed by an ordered map so repeated resolutions of unchanged
/// inputs print and serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedProperties {
    entries: BTreeMap<String, String>,
}

impl ResolvedProperties {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Assert that `key` resolved to a value.
    ///
    /// Returns the value on success and
    /// [`Error::RequiredProperty`] naming the key otherwise. Pure
    /// read; callers decide whether the failure is fatal.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| Error::RequiredProperty {
            key: key.to_string(),
        })
    }

    /// Derive the filter-token map: key → value passthrough for every
    /// property except `systemProp.`-prefixed ones.
    pub fn filter_tokens(&self) -> FilterTokenMap {
        self.entries
            .iter()
            .filter(|(key, _)| !key.starts_with(SYSTEM_PROP_PREFIX))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Overlay one layer; the layer's value wins on key collision.
    pub(crate) fn apply(&mut self, layer: PropertyLayer) {
        self.entries.extend(layer.into_entries());
    }
}
