//! Optional property-file loading.

use crate::{Error, Result, format};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Load a property file if it exists.
///
/// Returns `Ok(None)` when `path` is not a file; absence is a normal
/// condition, never an error. A present but unreadable or malformed
/// file is an error carrying the path (and line, for parse failures).
pub fn load_properties(path: &Path) -> Result<Option<HashMap<String, String>>> {
    if !path.is_file() {
        tracing::debug!(?path, "No property file found — skipping");
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let entries = format::parse_properties(path, &content)?;
    tracing::debug!(?path, count = entries.len(), "Loaded property file");
    Ok(Some(entries))
}
