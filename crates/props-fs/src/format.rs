//! Line-oriented `key=value` property format.
//!
//! The format is deliberately minimal: one `key=value` entry per line,
//! full-line `#` comments, blank lines ignored. There are no escape or
//! continuation rules; values are plain text and may contain `=`.

use crate::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

/// Parse property-file text into a key/value map.
///
/// Keys and values are trimmed of surrounding whitespace. When a key
/// appears on more than one line, the later line wins. A non-blank,
/// non-comment line without `=` is a parse error naming `path` and the
/// 1-based line number.
pub fn parse_properties(path: &Path, text: &str) -> Result<HashMap<String, String>> {
    let mut entries = HashMap::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(Error::Parse {
                path: path.to_path_buf(),
                line: index + 1,
                message: format!("expected `key=value`, got `{line}`"),
            });
        };

        entries.insert(key.trim().to_string(), value.trim().to_string());
    }

    Ok(entries)
}
