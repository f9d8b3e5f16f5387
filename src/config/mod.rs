use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::nav::{ParseError, Role, ViewId};

const APP_NAME: &str = "concierge";

/// Startup preferences read from `config.toml`
///
/// The file is only ever read. Role and view changes made in the UI are not
/// written back.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Role active at startup (`manager`, `front-desk`, ...)
    pub role: Option<String>,

    /// View shown at startup
    pub view: Option<String>,

    /// Event loop tick in milliseconds
    pub tick_rate_ms: Option<u64>,

    /// Default tracing filter when RUST_LOG is unset
    pub log_level: Option<String>,
}

impl Config {
    pub fn role(&self) -> Result<Option<Role>, ParseError> {
        self.role.as_deref().map(str::parse::<Role>).transpose()
    }

    pub fn view(&self) -> Result<Option<ViewId>, ParseError> {
        self.view.as_deref().map(str::parse::<ViewId>).transpose()
    }

    pub fn tick_rate_ms(&self) -> u64 {
        self.tick_rate_ms.unwrap_or(200).clamp(16, 5_000)
    }

    pub fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("info")
    }
}

/// Missing or malformed files fall back to defaults
pub fn load_from(path: &Path) -> Config {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    toml::from_str::<Config>(&content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("CONCIERGE_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join(APP_NAME).join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join(APP_NAME).join("config.toml"));
    }

    directories::ProjectDirs::from("io", APP_NAME, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join(APP_NAME));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join(APP_NAME));
    }
    directories::ProjectDirs::from("io", APP_NAME, APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_dir() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("logs"))
}

pub fn export_dir() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("exports"))
}
