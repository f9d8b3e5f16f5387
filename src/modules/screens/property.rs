use super::{Card, Screen};
use crate::nav::ViewId;

pub static ROOMS: Screen = Screen {
    view: ViewId::Rooms,
    title: "Room Management",
    subtitle: "Room status, housekeeping and maintenance",
    cards: &[
        Card {
            glyph: "▦",
            title: "Room Status",
            caption: "Clean, dirty and out-of-order rooms",
        },
        Card {
            glyph: "✧",
            title: "Housekeeping Tasks",
            caption: "Assign and track cleaning rounds",
        },
        Card {
            glyph: "⚙",
            title: "Maintenance",
            caption: "Log and follow up repair requests",
        },
    ],
};

pub static EVENTS: Screen = Screen {
    view: ViewId::Events,
    title: "Event & Conference Management",
    subtitle: "Manage events, conferences, and venue bookings",
    cards: &[
        Card {
            glyph: "▤",
            title: "Event Calendar",
            caption: "View and manage upcoming events",
        },
        Card {
            glyph: "☺",
            title: "Venue Management",
            caption: "Configure event spaces and capacity",
        },
        Card {
            glyph: "$",
            title: "Event Billing",
            caption: "Manage event pricing and invoices",
        },
    ],
};
