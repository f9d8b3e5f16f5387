use chrono::{DateTime, Local};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod widgets;

use crate::app::{App, Focus, InputMode, StatusLevel};
use crate::config;
use crate::core::Module;
use crate::logging;
use crate::nav::entry_for;

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, Local::now());
    app.role_bar
        .render(f, areas.roles, &app.ctx, app.focus == Focus::Roles);
    app.sidebar
        .render(f, areas.menu, &app.ctx, app.focus == Focus::Menu);
    app.content
        .render(f, areas.content, &app.ctx, app.focus == Focus::Content);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
    if app.settings_open {
        draw_settings_popup(f, areas.size, app);
    }
}

/// Header date, e.g. "Monday, October 19, 2026"
pub fn format_header_date(now: DateTime<Local>) -> String {
    now.format("%A, %B %-d, %Y").to_string()
}

fn draw_header(f: &mut Frame, area: Rect, now: DateTime<Local>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let brand = Line::from(vec![
        Span::styled(" ♛ ", Style::default().fg(Color::Black).bg(Color::Yellow)),
        Span::raw(" "),
        Span::styled(
            "Core 1",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Management System", Style::default().fg(Color::DarkGray)),
    ]);
    let left = Paragraph::new(brand)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let badges = Line::from(vec![
        Span::styled(
            format!(" {} ", format_header_date(now)),
            Style::default().fg(Color::LightBlue),
        ),
        Span::raw(" "),
        Span::styled(
            " System Online ",
            Style::default().fg(Color::Black).bg(Color::LightGreen),
        ),
        Span::raw(" "),
    ]);
    let right = Paragraph::new(badges)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Right);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let view_label = entry_for(app.view())
        .map(|entry| entry.label)
        .unwrap_or_else(|| app.view().id());
    let mut spans = vec![
        Span::styled("Role ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.role().label())),
        Span::styled("View ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", view_label)),
        Span::styled("Focus ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.focus_label()),
    ];
    if !app.visible_menu().iter().any(|entry| entry.id == app.view()) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "(not in this role's menu)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("view", "Open a view: view <id>"),
        ("home", "Back to the dashboard"),
        ("role", "Switch role: role <id>"),
        ("export", "Export visible menu: export [json|csv]"),
        ("settings", "Show settings"),
        ("help", "Show key bindings"),
        ("quit", "Quit"),
    ];

    for (cmd, desc) in commands {
        if cmd.starts_with(&input) || input.starts_with(cmd) {
            return Some(desc);
        }
    }
    None
}

fn action_hints() -> Line<'static> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let text = |t: &'static str| Span::styled(t, Style::default().fg(Color::DarkGray));
    Line::from(vec![
        key("Tab"),
        text(" focus  "),
        key("j/k"),
        text(" move  "),
        key("Enter"),
        text(" open  "),
        key("1-4"),
        text(" role  "),
        key(":"),
        text(" command  "),
        key("e"),
        text(" export  "),
        key("?"),
        text(" help  "),
        key("q"),
        text(" quit"),
    ])
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint = command_hint(&app.command.input);
            let hint_text = hint.unwrap_or("view <id> | role <id> | export | help | quit");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.as_str()),
                Span::styled(
                    format!("  {}", hint_text),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text, Style::default().fg(color)),
                ])
            } else {
                action_hints()
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  Tab / S-Tab  Cycle focus: roles, menu, content"),
        Line::from("  j / k        Move within the focused pane"),
        Line::from("  Enter        Open view / pick role / open card"),
        Line::from("  g            Back to the dashboard"),
        Line::from("  Mouse        Click a role or a menu item"),
        Line::from(""),
        Line::from("Roles"),
        Line::from("  1-4          Manager, Front Desk, Housekeeping, Marketing"),
        Line::from("  [ / ]        Previous / next role"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  : or /       Command line"),
        Line::from("  e            Export visible menu (JSON)"),
        Line::from("  s            Settings"),
        Line::from("  ?            Toggle help"),
        Line::from("  q            Quit"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  :view rooms   :role marketing   :export csv   :home"),
        Line::from(""),
        Line::from(format!(
            "Active: {} on {}",
            app.role().label(),
            app.view().id()
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn draw_settings_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(70, 50, area);
    f.render_widget(Clear, popup_area);

    let config_path = app
        .config_path
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "(unknown)".to_string());
    let log_path = config::log_dir()
        .map(|dir| dir.join(logging::LOG_FILE).display().to_string())
        .unwrap_or_else(|| "(disabled)".to_string());
    let export_dir = app
        .export_dir
        .clone()
        .or_else(config::export_dir)
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "(unknown)".to_string());

    let lines = vec![
        Line::from(Span::styled(
            "Settings",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Config:  {}", config_path)),
        Line::from(format!("Log:     {}", log_path)),
        Line::from(format!("Exports: {}", export_dir)),
        Line::from(""),
        Line::from(format!("Role:    {}", app.role().label())),
        Line::from(format!("View:    {}", app.view().id())),
        Line::from(format!("Menu:    {} entries", app.visible_menu().len())),
        Line::from(""),
        Line::from(Span::styled(
            "Role and view are not saved between sessions.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from("Keys: Esc close"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Settings").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_header_date_matches_long_us_format() {
        let when = Local.with_ymd_and_hms(2026, 10, 5, 9, 0, 0).unwrap();
        assert_eq!(format_header_date(when), "Monday, October 5, 2026");
    }

    #[test]
    fn test_command_hint_prefix() {
        assert_eq!(command_hint("ro"), Some("Switch role: role <id>"));
        assert_eq!(command_hint("view rooms"), Some("Open a view: view <id>"));
        assert_eq!(command_hint(""), None);
        assert_eq!(command_hint("zzz"), None);
    }
}
