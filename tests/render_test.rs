//! Full-frame rendering against ratatui's test backend

use std::path::PathBuf;

use concierge::app::App;
use concierge::nav::{Role, ViewId};
use concierge::ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn render(app: &App) -> Vec<String> {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer.get(x, y).symbol().to_string())
                .collect()
        })
        .collect()
}

fn screen_contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

#[test]
fn test_marketing_sidebar_hides_operations() {
    let app = App::with_startup(Role::Marketing, ViewId::GuestProfile);
    let lines = render(&app);
    assert!(screen_contains(&lines, "Guest CRM"));
    assert!(screen_contains(&lines, "Channel Manager"));
    assert!(screen_contains(&lines, "Settings"));
    assert!(!screen_contains(&lines, "Room Management"));
    assert!(!screen_contains(&lines, "Billing & POS"));
}

#[test]
fn test_header_and_content_render() {
    let mut app = App::new();
    app.select_view(ViewId::Channels);
    let lines = render(&app);
    assert!(screen_contains(&lines, "Core 1"));
    assert!(screen_contains(&lines, "System Online"));
    assert!(screen_contains(&lines, "Channel Management"));
    assert!(screen_contains(&lines, "OTA Integration"));
}

#[test]
fn test_front_desk_badge_is_shown() {
    let app = App::new();
    let lines = render(&app);
    let row = lines
        .iter()
        .find(|line| line.contains("Front Desk") && line.contains(" 3 "));
    assert!(row.is_some());
}

#[test]
fn test_settings_popup_names_config_in_use() {
    let mut app = App::new();
    app.config_path = Some(PathBuf::from("/srv/hotel/concierge.toml"));
    app.settings_open = true;
    let lines = render(&app);
    assert!(screen_contains(&lines, "/srv/hotel/concierge.toml"));
}
