//! Shell flows driven through the public App API and key handling

use concierge::app::{App, Focus, InputMode, StatusLevel};
use concierge::input::handle_key;
use concierge::nav::{Role, ViewId};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_command(app: &mut App, text: &str) {
    press(app, KeyCode::Char(':'));
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
    press(app, KeyCode::Enter);
}

#[test]
fn test_initial_state() {
    let app = App::new();
    assert_eq!(app.role(), Role::Manager);
    assert_eq!(app.view(), ViewId::Dashboard);
    assert_eq!(app.visible_menu().len(), 8);
}

#[test]
fn test_role_round_trip_restores_menu() {
    let mut app = App::new();
    let initial: Vec<ViewId> = app.visible_menu().iter().map(|e| e.id).collect();

    app.select_role(Role::Housekeeping);
    assert_ne!(
        app.visible_menu().iter().map(|e| e.id).collect::<Vec<_>>(),
        initial
    );
    app.select_role(Role::Manager);

    let after: Vec<ViewId> = app.visible_menu().iter().map(|e| e.id).collect();
    assert_eq!(after, initial);
}

#[test]
fn test_each_selection_replaces_the_previous_view() {
    let mut app = App::new();
    app.navigate("rooms");
    assert_eq!(app.view(), ViewId::Rooms);
    app.navigate("analytics");
    assert_eq!(app.view(), ViewId::Analytics);
    assert_eq!(app.current_screen().title, "Analytics & Reporting");
}

#[test]
fn test_navigate_unknown_lands_home() {
    let mut app = App::new();
    app.navigate("events");
    app.navigate("spa-and-wellness");
    assert_eq!(app.view(), ViewId::Dashboard);
}

#[test]
fn test_sidebar_keys_walk_the_filtered_menu() {
    let mut app = App::with_startup(Role::Marketing, ViewId::GuestProfile);
    assert_eq!(app.focus, Focus::Menu);
    assert_eq!(app.sidebar.cursor(), 0);

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view(), ViewId::Channels);

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    assert!(app.settings_open);
    press(&mut app, KeyCode::Esc);
    assert!(!app.settings_open);
}

#[test]
fn test_role_bar_focus_and_selection() {
    let mut app = App::new();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Content);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Roles);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus, Focus::Content);
    press(&mut app, KeyCode::Tab);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.role(), Role::FrontDesk);
    assert_eq!(
        app.status_text(),
        Some(("Role: Front Desk", StatusLevel::Info))
    );
}

#[test]
fn test_commands_switch_role_and_view() {
    let mut app = App::new();
    type_command(&mut app, "role marketing");
    assert_eq!(app.role(), Role::Marketing);
    assert_eq!(app.input_mode, InputMode::Normal);

    type_command(&mut app, "view channels");
    assert_eq!(app.view(), ViewId::Channels);

    type_command(&mut app, "home");
    assert_eq!(app.view(), ViewId::Dashboard);
    assert_eq!(app.command.last.as_deref(), Some("home"));
}

#[test]
fn test_bad_commands_warn_without_changing_state() {
    let mut app = App::new();
    type_command(&mut app, "role owner");
    assert_eq!(app.role(), Role::Manager);
    assert!(matches!(app.status_text(), Some((_, StatusLevel::Warn))));

    type_command(&mut app, "frobnicate");
    assert_eq!(
        app.status_text(),
        Some(("Unknown command: frobnicate", StatusLevel::Warn))
    );

    type_command(&mut app, "export xml");
    assert!(matches!(app.status_text(), Some((_, StatusLevel::Warn))));
}

#[test]
fn test_export_command_writes_into_configured_dir() {
    let dir = std::env::temp_dir().join(format!("concierge-flow-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);

    let mut app = App::with_startup(Role::Marketing, ViewId::HOME);
    app.export_dir = Some(dir.clone());
    type_command(&mut app, "export csv");

    assert!(matches!(app.status_text(), Some((_, StatusLevel::Info))));
    let files: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("menu-marketing-"));
    assert!(name.ends_with(".csv"));
}

#[test]
fn test_quit_paths() {
    let mut app = App::new();
    type_command(&mut app, "quit");
    assert!(app.should_quit);

    let mut app = App::new();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}
