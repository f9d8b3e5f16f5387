//! Export Module
//!
//! Writes the menu visible to a role to disk.
//!
//! - 'e' key or `:export [json|csv]` triggers an export for the active role
//! - `--export <PATH>` does the same without starting the TUI
//! - Interactive exports land in the data directory's `exports/` folder

mod csv_export;
mod json_export;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::config;
use crate::core::{Action, NotifyLevel};
use crate::nav::{filter_menu, MenuEntry, Role, ViewId, MENU};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(format!("unsupported export format `{other}` (json or csv)")),
        }
    }
}

/// Exportable view of a menu entry
#[derive(Debug, Clone, Serialize)]
pub struct MenuRecord {
    pub id: ViewId,
    pub label: &'static str,
    pub roles: Vec<Role>,
    pub badge: Option<u32>,
}

impl From<&MenuEntry> for MenuRecord {
    fn from(entry: &MenuEntry) -> Self {
        Self {
            id: entry.id,
            label: entry.label,
            roles: entry.roles.to_vec(),
            badge: entry.badge,
        }
    }
}

/// Records for the menu `role` can see
pub fn menu_records(role: Role) -> Vec<MenuRecord> {
    filter_menu(&MENU, role)
        .into_iter()
        .map(MenuRecord::from)
        .collect()
}

/// Write the menu visible to `role` to `path`
pub fn write_menu(path: &Path, format: ExportFormat, role: Role) -> Result<usize> {
    let records = menu_records(role);
    let count = match format {
        ExportFormat::Json => json_export::write_menu(path, &records)?,
        ExportFormat::Csv => csv_export::write_menu(path, &records)?,
    };
    tracing::info!(%role, %format, path = %path.display(), count, "exported menu");
    Ok(count)
}

/// Get the export directory path, creating it if needed
fn export_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => config::export_dir()
            .unwrap_or_else(|| PathBuf::from(".concierge").join("exports")),
    };
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;
    Ok(dir)
}

/// Generate a timestamped filename
fn generate_filename(role: Role, format: ExportFormat) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    format!("menu-{}-{}.{}", role.id(), timestamp, format.extension())
}

/// Export the menu for `role` into the export directory
///
/// Returns the notification the shell should display.
pub fn export_menu(role: Role, format: ExportFormat, dir: Option<&Path>) -> Action {
    let result = export_dir(dir).and_then(|dir| {
        let path = dir.join(generate_filename(role, format));
        write_menu(&path, format, role).map(|count| (count, path))
    });

    match result {
        Ok((count, path)) => Action::Notify(
            format!("Exported {} menu entries to {}", count, path.display()),
            NotifyLevel::Info,
        ),
        Err(err) => {
            tracing::warn!(error = %err, "menu export failed");
            Action::Notify(format!("Export failed: {err:#}"), NotifyLevel::Error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "concierge-export-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("menu.CSV")),
            Some(ExportFormat::Csv)
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("out/menu.json")),
            Some(ExportFormat::Json)
        );
        assert_eq!(ExportFormat::from_path(Path::new("menu.txt")), None);
        assert_eq!(ExportFormat::from_path(Path::new("menu")), None);
    }

    #[test]
    fn test_csv_lists_visible_entries() {
        let dir = scratch("csv");
        let path = dir.join("menu.csv");
        let count = write_menu(&path, ExportFormat::Csv, Role::Marketing).unwrap();
        assert_eq!(count, 2);

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id,label,roles,badge");
        assert_eq!(lines[1], "guest-profile,Guest CRM,manager|marketing|front-desk,");
        assert_eq!(lines[2], "channels,Channel Manager,manager|marketing,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_json_keeps_badge_and_kebab_ids() {
        let dir = scratch("json");
        let path = dir.join("menu.json");
        write_menu(&path, ExportFormat::Json, Role::FrontDesk).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[1]["id"], "front-desk");
        assert_eq!(entries[1]["badge"], 3);
        assert!(entries[0]["badge"].is_null());
        assert!(entries[0].get("badge").is_some());
        assert_eq!(entries[2]["roles"][2], "front-desk");
    }

    #[test]
    fn test_export_menu_reports_written_file() {
        let dir = scratch("action");
        let action = export_menu(Role::Housekeeping, ExportFormat::Csv, Some(&dir));
        match action {
            Action::Notify(msg, NotifyLevel::Info) => {
                assert!(msg.starts_with("Exported 1 menu entries"));
            }
            other => panic!("unexpected action: {other:?}"),
        }
        let written = fs::read_dir(&dir).unwrap().count();
        assert_eq!(written, 1);
    }
}
