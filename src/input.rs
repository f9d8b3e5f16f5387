//! Keyboard and mouse handling for the shell

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, Focus, InputMode};
use crate::core::Action;
use crate::modules::export::ExportFormat;
use crate::nav::{Role, ViewId};
use crate::ui::layout::{self, UiAreas};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.help_open = false;
        }
        return;
    }

    if app.settings_open {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('q')) {
            app.settings_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }
        (KeyCode::Char('q'), _) => app.should_quit = true,
        (KeyCode::Char('?'), _) => app.help_open = true,
        (KeyCode::Char(':') | KeyCode::Char('/'), _) => app.enter_command(),
        (KeyCode::Char('s'), _) => app.settings_open = true,
        (KeyCode::Char('e'), _) => app.apply_action(Action::Export(ExportFormat::Json)),
        (KeyCode::Char('g'), _) => app.select_view(ViewId::HOME),
        (KeyCode::Char('['), _) => app.cycle_role(false),
        (KeyCode::Char(']'), _) => app.cycle_role(true),
        (KeyCode::Char(ch), _) if Role::from_shortcut(ch).is_some() => {
            if let Some(role) = Role::from_shortcut(ch) {
                app.apply_action(Action::SelectRole(role));
            }
        }
        (KeyCode::Tab, _) => app.cycle_focus(true),
        (KeyCode::BackTab, _) => app.cycle_focus(false),
        (KeyCode::Char('h'), _) => app.focus = focus_left(app.focus),
        (KeyCode::Char('l'), _) => app.focus = focus_right(app.focus),
        (KeyCode::Esc, _) => app.focus = Focus::Menu,
        _ => app.dispatch_key(key),
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

fn focus_left(focus: Focus) -> Focus {
    match focus {
        Focus::Content | Focus::Command => Focus::Menu,
        other => other,
    }
}

fn focus_right(focus: Focus) -> Focus {
    match focus {
        Focus::Roles | Focus::Menu | Focus::Command => Focus::Content,
        Focus::Content => Focus::Content,
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, size: Rect) {
    if app.help_open || app.settings_open || app.input_mode == InputMode::Command {
        return;
    }
    let areas = layout::areas(size);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_click(app, areas, mouse.column, mouse.row)
        }
        MouseEventKind::ScrollUp if layout::rect_contains(areas.sidebar, mouse.column, mouse.row) => {
            app.move_menu_cursor(true);
        }
        MouseEventKind::ScrollDown
            if layout::rect_contains(areas.sidebar, mouse.column, mouse.row) =>
        {
            app.move_menu_cursor(false);
        }
        _ => {}
    }
}

fn handle_click(app: &mut App, areas: UiAreas, col: u16, row: u16) {
    if layout::rect_contains(areas.roles, col, row) {
        app.focus = Focus::Roles;
        if let Some(role) = layout::list_row_at(areas.roles, col, row)
            .and_then(|idx| Role::ALL.get(idx).copied())
        {
            app.apply_action(Action::SelectRole(role));
        }
        return;
    }

    if layout::rect_contains(areas.menu, col, row) {
        app.focus = Focus::Menu;
        let Some(row_idx) = layout::list_row_at(areas.menu, col, row) else {
            return;
        };
        // The list scrolls to keep the cursor visible
        let visible_height = layout::rect_inner(areas.menu).height as usize;
        let idx = layout::list_offset(app.sidebar.cursor(), visible_height) + row_idx;
        if app.sidebar.row_at(app.role(), idx).is_some() {
            app.sidebar.set_cursor(app.role(), idx);
            app.activate_menu_cursor();
        }
        return;
    }

    if layout::rect_contains(areas.content, col, row) {
        app.focus = Focus::Content;
    }
}
