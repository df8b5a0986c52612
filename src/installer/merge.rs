//! Merging server entries into a shared host configuration file
//!
//! The file is read as a JSON tree and only `mcpServers` is touched:
//!
//! ```json
//! Existing: {"mcpServers": {"other": {...}}, "theme": "dark"}
//! New:      jetsong-gitlab
//! Result:   {"mcpServers": {"other": {...}, "jetsong-gitlab": {...}}, "theme": "dark"}
//! ```
//!
//! Entries with the same name are replaced whole. Every other key, inside
//! and outside `mcpServers`, is kept as is.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};

use crate::common::fs::{FileMode, write_atomic};
use crate::error::{JetsongError, Result, fs as fs_error};
use crate::generator::{SERVERS_KEY, ServerEntry, servers_map};

/// Merge `entries` into the document at `path`, creating it when missing
pub fn merge_servers(path: &Path, entries: &[ServerEntry]) -> Result<()> {
    let existing = match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(fs_error::read_failed(path, &e)),
    };

    let merged = merge_document(existing.as_deref(), entries, path)?;
    write_atomic(path, merged.as_bytes(), FileMode::Shared)?;

    tracing::info!(
        path = %path.display(),
        servers = ?entries.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
        "merged server entries"
    );
    Ok(())
}

/// Merge `entries` into `existing` text and return the new document.
///
/// `path` only names the file in errors.
pub fn merge_document(
    existing: Option<&str>,
    entries: &[ServerEntry],
    path: &Path,
) -> Result<String> {
    let mut root = match existing {
        Some(content) if !content.trim().is_empty() => parse_object(content, path)?,
        _ => Map::new(),
    };

    let servers = root
        .entry(SERVERS_KEY)
        .or_insert_with(|| Value::Object(Map::new()));
    if !servers.is_object() {
        tracing::warn!(path = %path.display(), "replacing non-object {SERVERS_KEY}");
        *servers = Value::Object(Map::new());
    }
    if let Value::Object(servers) = servers {
        servers.extend(servers_map(entries));
    }

    let mut text = serde_json::to_string_pretty(&Value::Object(root)).map_err(|e| {
        JetsongError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    })?;
    text.push('\n');
    Ok(text)
}

fn parse_object(content: &str, path: &Path) -> Result<Map<String, Value>> {
    let parse_failed = |reason: String| JetsongError::ConfigParseFailed {
        path: path.display().to_string(),
        reason,
    };
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(parse_failed("top level is not an object".to_string())),
        Err(e) => Err(parse_failed(e.to_string())),
    }
}
