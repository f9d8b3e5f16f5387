//! Terminal shell for a hotel property-management dashboard: a role-filtered
//! sidebar, a view router and placeholder screens.

pub mod app;
pub mod config;
pub mod core;
pub mod input;
pub mod logging;
pub mod modules;
pub mod nav;
pub mod ui;
