//! Sidebar menu - the role-filtered list of views plus Settings

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::nav::{filter_menu, MenuEntry, Role, MENU, SETTINGS_LABEL};

/// Row under the sidebar cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRow {
    Entry(&'static MenuEntry),
    Settings,
}

#[derive(Debug, Clone, Default)]
pub struct Sidebar {
    cursor: usize,
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Menu rows for `role`: filtered entries, then the Settings item
    pub fn rows(role: Role) -> Vec<MenuRow> {
        filter_menu(&MENU, role)
            .into_iter()
            .map(MenuRow::Entry)
            .chain(std::iter::once(MenuRow::Settings))
            .collect()
    }

    pub fn row_at(&self, role: Role, index: usize) -> Option<MenuRow> {
        Self::rows(role).get(index).copied()
    }

    pub fn selected_row(&self, role: Role) -> Option<MenuRow> {
        self.row_at(role, self.cursor)
    }

    pub fn move_up(&mut self, role: Role) {
        let len = Self::rows(role).len();
        self.cursor = if self.cursor == 0 {
            len.saturating_sub(1)
        } else {
            self.cursor - 1
        };
    }

    pub fn move_down(&mut self, role: Role) {
        let len = Self::rows(role).len();
        self.cursor = if self.cursor + 1 >= len { 0 } else { self.cursor + 1 };
    }

    pub fn set_cursor(&mut self, role: Role, index: usize) {
        let len = Self::rows(role).len();
        self.cursor = index.min(len.saturating_sub(1));
    }

    /// Put the cursor on the active view when the role can see it
    pub fn sync(&mut self, ctx: &Context) {
        let rows = Self::rows(ctx.role());
        self.cursor = rows
            .iter()
            .position(|row| matches!(row, MenuRow::Entry(entry) if entry.id == ctx.view()))
            .unwrap_or_else(|| self.cursor.min(rows.len().saturating_sub(1)));
    }

    /// Action for activating a row
    pub fn activate(row: MenuRow) -> Action {
        match row {
            MenuRow::Entry(entry) => Action::Navigate(entry.id),
            MenuRow::Settings => Action::OpenSettings,
        }
    }
}

impl Module for Sidebar {
    fn id(&self) -> &'static str {
        "sidebar"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up(ctx.role());
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down(ctx.role());
                Action::None
            }
            KeyCode::Enter => self
                .selected_row(ctx.role())
                .map(Self::activate)
                .unwrap_or(Action::None),
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context, focused: bool) {
        let items: Vec<ListItem> = Self::rows(ctx.role())
            .into_iter()
            .map(|row| match row {
                MenuRow::Entry(entry) => {
                    let is_active = entry.id == ctx.view();
                    let mut spans = vec![Span::raw(format!(" {}", entry.label))];
                    if let Some(count) = entry.badge {
                        spans.push(Span::raw(" "));
                        spans.push(Span::styled(
                            format!(" {count} "),
                            Style::default().fg(Color::White).bg(Color::Red),
                        ));
                    }
                    let style = if is_active {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Yellow)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    ListItem::new(Line::from(spans)).style(style)
                }
                MenuRow::Settings => ListItem::new(Line::from(Span::styled(
                    format!(" {SETTINGS_LABEL}"),
                    Style::default().fg(Color::Gray),
                ))),
            })
            .collect();

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("MENU")
                    .border_style(border_style),
            )
            .highlight_symbol(if focused { ">" } else { " " });

        let mut state = ListState::default();
        state.select(Some(self.cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
