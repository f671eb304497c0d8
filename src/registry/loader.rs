//! Apps-file I/O.
//!
//! The registry source is a JSON array of `{ "name": ..., "path": ... }`
//! objects. Only this loader knows the encoding; the registry itself
//! consumes plain `(name, path)` entries.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One application entry as stored in the apps file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppEntry {
    pub name: String,
    pub path: String,
}

/// Read all entries from an apps file.
pub fn read_entries(path: &Path) -> Result<Vec<AppEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read apps file: {}", path.display()))?;

    let entries: Vec<AppEntry> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse apps file: {}", path.display()))?;

    Ok(entries)
}

/// Write entries to an apps file (pretty-printed).
pub fn write_entries(path: &Path, entries: &[AppEntry]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content =
        serde_json::to_string_pretty(entries).context("Failed to serialize apps file")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write apps file: {}", path.display()))?;

    Ok(())
}
