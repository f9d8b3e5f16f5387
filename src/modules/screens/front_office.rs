use super::{Card, Screen};
use crate::nav::ViewId;

pub static DASHBOARD: Screen = Screen {
    view: ViewId::Dashboard,
    title: "Hotel Dashboard",
    subtitle: "Today's overview of occupancy, arrivals and revenue",
    cards: &[
        Card {
            glyph: "⌂",
            title: "Occupancy",
            caption: "Rooms occupied tonight",
        },
        Card {
            glyph: "→",
            title: "Arrivals & Departures",
            caption: "Expected check-ins and check-outs",
        },
        Card {
            glyph: "$",
            title: "Revenue Snapshot",
            caption: "Room and outlet revenue for today",
        },
    ],
};

pub static FRONT_DESK: Screen = Screen {
    view: ViewId::FrontDesk,
    title: "Front Desk Operations",
    subtitle: "Check-ins, check-outs and walk-in reservations",
    cards: &[
        Card {
            glyph: "✓",
            title: "Check-In",
            caption: "Register arriving guests",
        },
        Card {
            glyph: "←",
            title: "Check-Out",
            caption: "Settle folios for departing guests",
        },
        Card {
            glyph: "+",
            title: "Walk-In Booking",
            caption: "Reserve a room at the desk",
        },
    ],
};

pub static GUEST_PROFILE: Screen = Screen {
    view: ViewId::GuestProfile,
    title: "Guest Relationship Management",
    subtitle: "Guest profiles, stay history and preferences",
    cards: &[
        Card {
            glyph: "☺",
            title: "Guest Profiles",
            caption: "Contact details and loyalty status",
        },
        Card {
            glyph: "☰",
            title: "Stay History",
            caption: "Previous visits and spend",
        },
        Card {
            glyph: "★",
            title: "Preferences",
            caption: "Room, dietary and amenity requests",
        },
    ],
};
