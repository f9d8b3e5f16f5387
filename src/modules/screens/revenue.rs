use super::{Card, Screen};
use crate::nav::ViewId;

pub static BILLING: Screen = Screen {
    view: ViewId::Billing,
    title: "Billing & Point of Sale",
    subtitle: "Unified billing system for rooms, restaurants, and services",
    cards: &[
        Card {
            glyph: "$",
            title: "Guest Billing",
            caption: "Manage room charges and guest bills",
        },
        Card {
            glyph: "⌂",
            title: "Restaurant POS",
            caption: "Process restaurant and bar orders",
        },
        Card {
            glyph: "⚙",
            title: "Payment Processing",
            caption: "Handle various payment methods",
        },
    ],
};

pub static CHANNELS: Screen = Screen {
    view: ViewId::Channels,
    title: "Channel Management",
    subtitle: "Manage OTA integrations and distribution channels",
    cards: &[
        Card {
            glyph: "◍",
            title: "OTA Integration",
            caption: "Connect with Booking.com, Expedia, Agoda",
        },
        Card {
            glyph: "⚙",
            title: "Rate Management",
            caption: "Sync pricing across all channels",
        },
        Card {
            glyph: "▥",
            title: "Availability Sync",
            caption: "Real-time inventory updates",
        },
    ],
};

pub static ANALYTICS: Screen = Screen {
    view: ViewId::Analytics,
    title: "Analytics & Reporting",
    subtitle: "Comprehensive business intelligence and reports",
    cards: &[
        Card {
            glyph: "▥",
            title: "Revenue Analytics",
            caption: "Track revenue trends and forecasts",
        },
        Card {
            glyph: "☺",
            title: "Guest Demographics",
            caption: "Analyze guest patterns and preferences",
        },
        Card {
            glyph: "⌂",
            title: "Occupancy Reports",
            caption: "Monitor room utilization and trends",
        },
    ],
};
