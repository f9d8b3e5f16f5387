//! Actions that modules can return to communicate with the app

use crate::modules::export::ExportFormat;
use crate::nav::{Role, ViewId};

/// Actions returned by modules and commands to communicate state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Switch the content area to a view
    Navigate(ViewId),

    /// Replace the active role
    SelectRole(Role),

    /// Write the menu visible to the active role to disk
    Export(ExportFormat),

    /// Open the settings popup
    OpenSettings,

    /// Open the help popup
    OpenHelp,

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
