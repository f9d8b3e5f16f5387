//! Placeholder screens and the view router
//!
//! Every screen is a static description: a heading and a handful of cards.
//! None of them are bound to data.

mod front_office;
mod property;
mod revenue;

use crate::nav::ViewId;

/// A placeholder card inside a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub glyph: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

/// Renderable description of one view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub view: ViewId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cards: &'static [Card],
}

impl Screen {
    pub fn card(&self, index: usize) -> Option<&'static Card> {
        self.cards.get(index)
    }
}

/// Screen for a known view
pub fn screen(view: ViewId) -> &'static Screen {
    match view {
        ViewId::Dashboard => &front_office::DASHBOARD,
        ViewId::FrontDesk => &front_office::FRONT_DESK,
        ViewId::GuestProfile => &front_office::GUEST_PROFILE,
        ViewId::Rooms => &property::ROOMS,
        ViewId::Events => &property::EVENTS,
        ViewId::Billing => &revenue::BILLING,
        ViewId::Channels => &revenue::CHANNELS,
        ViewId::Analytics => &revenue::ANALYTICS,
    }
}

/// Route a raw view identifier to its screen; unknown ids get the home screen
pub fn select_view(view_id: &str) -> &'static Screen {
    screen(ViewId::resolve(view_id))
}
