//! Role-based navigation: roles, views, and the sidebar menu

pub mod menu;
pub mod role;
pub mod view;

use thiserror::Error;

pub use menu::{entry_for, filter_menu, MenuEntry, MENU, SETTINGS_LABEL};
pub use role::Role;
pub use view::ViewId;

/// Strict parsing failures for role and view identifiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown role `{0}` (expected manager, front-desk, housekeeping or marketing)")]
    UnknownRole(String),
    #[error("unknown view `{0}`")]
    UnknownView(String),
}
