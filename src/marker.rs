//! Marker file handling.
//!
//! The marker is a zero-content file whose only meaningful properties are
//! existence and modification time; an external monitoring process consumes
//! the timestamp. Every run refreshes it before anything else happens.

use std::fs::OpenOptions;
use std::path::Path;
use std::time::SystemTime;

use anyhow::{Context, Result};

/// Create the marker file if absent, or update its mtime if present.
pub fn touch(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open marker file {}", path.display()))?;
    file.set_modified(SystemTime::now())
        .with_context(|| format!("failed to update mtime of {}", path.display()))?;
    Ok(())
}
