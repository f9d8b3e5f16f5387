//! CSV Export
//!
//! Writes menu entries to a CSV file, one row per entry.

use std::path::Path;

use anyhow::{Context, Result};

use super::MenuRecord;

/// Write menu records to CSV file
pub fn write_menu(path: &Path, records: &[MenuRecord]) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    wtr.write_record(["id", "label", "roles", "badge"])?;

    for record in records {
        let roles = record
            .roles
            .iter()
            .map(|role| role.id())
            .collect::<Vec<_>>()
            .join("|");
        wtr.write_record([
            record.id.id().to_string(),
            record.label.to_string(),
            roles,
            record.badge.map(|b| b.to_string()).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(records.len())
}
