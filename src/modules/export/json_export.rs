//! JSON Export
//!
//! Writes menu entries as a pretty-printed JSON array.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::MenuRecord;

/// Write menu records to JSON file
pub fn write_menu(path: &Path, records: &[MenuRecord]) -> Result<usize> {
    let json = serde_json::to_string_pretty(records)?;

    let mut file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;

    Ok(records.len())
}
