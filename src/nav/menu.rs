//! Static sidebar menu and the role filter over it

use super::{Role, ViewId};

/// One navigation item in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: ViewId,
    pub label: &'static str,
    pub roles: &'static [Role],
    /// Counter shown next to the label (pending arrivals on Front Desk)
    pub badge: Option<u32>,
}

impl MenuEntry {
    pub fn is_visible_to(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

pub static MENU: [MenuEntry; 8] = [
    MenuEntry {
        id: ViewId::Dashboard,
        label: "Dashboard",
        roles: &[Role::Manager, Role::FrontDesk],
        badge: None,
    },
    MenuEntry {
        id: ViewId::FrontDesk,
        label: "Front Desk",
        roles: &[Role::Manager, Role::FrontDesk],
        badge: Some(3),
    },
    MenuEntry {
        id: ViewId::GuestProfile,
        label: "Guest CRM",
        roles: &[Role::Manager, Role::Marketing, Role::FrontDesk],
        badge: None,
    },
    MenuEntry {
        id: ViewId::Rooms,
        label: "Room Management",
        roles: &[Role::Manager, Role::Housekeeping],
        badge: None,
    },
    MenuEntry {
        id: ViewId::Events,
        label: "Events",
        roles: &[Role::Manager, Role::FrontDesk],
        badge: None,
    },
    MenuEntry {
        id: ViewId::Billing,
        label: "Billing & POS",
        roles: &[Role::Manager, Role::FrontDesk],
        badge: None,
    },
    MenuEntry {
        id: ViewId::Channels,
        label: "Channel Manager",
        roles: &[Role::Manager, Role::Marketing],
        badge: None,
    },
    MenuEntry {
        id: ViewId::Analytics,
        label: "Analytics",
        roles: &[Role::Manager],
        badge: None,
    },
];

/// Label of the trailing sidebar item every role sees
pub const SETTINGS_LABEL: &str = "Settings";

/// Entries visible to `role`, in declaration order
pub fn filter_menu(entries: &[MenuEntry], role: Role) -> Vec<&MenuEntry> {
    entries
        .iter()
        .filter(|entry| entry.is_visible_to(role))
        .collect()
}

pub fn entry_for(view: ViewId) -> Option<&'static MenuEntry> {
    MENU.iter().find(|entry| entry.id == view)
}
