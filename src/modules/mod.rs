//! UI Modules
//!
//! Each focusable module implements the Module trait and handles its own
//! key input and rendering:
//! - role_bar: role selector at the top of the sidebar
//! - sidebar: role-filtered menu plus Settings
//! - content: the routed screen as a grid of placeholder cards
//!
//! screens holds the static screen descriptions and the view router;
//! export writes the visible menu to JSON or CSV.

pub mod content;
pub mod export;
pub mod role_bar;
pub mod screens;
pub mod sidebar;

pub use content::ContentPanel;
pub use role_bar::RoleBar;
pub use sidebar::{MenuRow, Sidebar};
