//! Scan an existing directory into the renderer's seed map.
//!
//! Paths are relative to the scan root and use `/` separators on every
//! platform, matching what plugins write. Version-control internals and
//! installed dependencies are skipped; they are never generation inputs.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::AdapterError;

const SKIPPED_DIRS: [&str; 3] = [".git", "node_modules", ".next"];

/// Read every regular file under `root` into a path→bytes map.
///
/// Returns an empty map when `root` does not exist; a fresh target is
/// simply a target with no existing files.
pub fn scan_existing(root: &Path) -> Result<HashMap<String, Vec<u8>>, AdapterError> {
    let mut files = HashMap::new();
    if !root.exists() {
        return Ok(files);
    }

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        entry
            .file_name()
            .to_str()
            .is_none_or(|name| !SKIPPED_DIRS.contains(&name))
    });

    for entry in walker {
        let entry = entry.map_err(|e| AdapterError::Filesystem {
            path: root.to_path_buf(),
            reason: format!("Failed to walk directory: {e}"),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| AdapterError::Filesystem {
                path: entry.path().to_path_buf(),
                reason: format!("Failed to relativize path: {e}"),
            })?;
        let key = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let contents = std::fs::read(entry.path())
            .map_err(|e| AdapterError::io(entry.path(), "read file", e))?;
        files.insert(key, contents);
    }

    debug!(root = %root.display(), files = files.len(), "existing files scanned");
    Ok(files)
}
