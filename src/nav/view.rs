//! Content views the main area can display

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseError;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    #[default]
    Dashboard,
    FrontDesk,
    GuestProfile,
    Rooms,
    Events,
    Billing,
    Channels,
    Analytics,
}

impl ViewId {
    pub const ALL: [ViewId; 8] = [
        ViewId::Dashboard,
        ViewId::FrontDesk,
        ViewId::GuestProfile,
        ViewId::Rooms,
        ViewId::Events,
        ViewId::Billing,
        ViewId::Channels,
        ViewId::Analytics,
    ];

    /// Home view, also the fallback for identifiers nobody recognises
    pub const HOME: ViewId = ViewId::Dashboard;

    pub fn id(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::FrontDesk => "front-desk",
            ViewId::GuestProfile => "guest-profile",
            ViewId::Rooms => "rooms",
            ViewId::Events => "events",
            ViewId::Billing => "billing",
            ViewId::Channels => "channels",
            ViewId::Analytics => "analytics",
        }
    }

    /// Exact identifier match, no normalisation
    pub fn from_id(id: &str) -> Option<ViewId> {
        ViewId::ALL.into_iter().find(|view| view.id() == id)
    }

    /// Navigation lookup: anything but an exact id lands on the home view
    pub fn resolve(id: &str) -> ViewId {
        ViewId::from_id(id).unwrap_or(ViewId::HOME)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Typed input (CLI, config, `:view`) is forgiving about case and separators
impl FromStr for ViewId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace(['_', ' '], "-");
        ViewId::from_id(&needle).ok_or_else(|| ParseError::UnknownView(s.to_string()))
    }
}
