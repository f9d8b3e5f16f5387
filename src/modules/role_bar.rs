//! Role selector shown at the top of the sidebar

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::nav::Role;

#[derive(Debug, Clone, Default)]
pub struct RoleBar {
    cursor: usize,
}

impl RoleBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn highlighted(&self) -> Role {
        Role::ALL[self.cursor.min(Role::ALL.len() - 1)]
    }

    /// Move the cursor onto the active role
    pub fn sync(&mut self, ctx: &Context) {
        self.cursor = Role::ALL
            .iter()
            .position(|role| *role == ctx.role())
            .unwrap_or(0);
    }
}

impl Module for RoleBar {
    fn id(&self) -> &'static str {
        "roles"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &Context) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.highlighted().cycle(false) as usize;
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = self.highlighted().cycle(true) as usize;
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Action::SelectRole(self.highlighted()),
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context, focused: bool) {
        let items: Vec<ListItem> = Role::ALL
            .iter()
            .map(|role| {
                let is_active = *role == ctx.role();
                let style = if is_active {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {} ", role.shortcut()),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(role.label()),
                ]))
                .style(style)
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
                    .title("ROLE")
                    .border_style(border_style),
            )
            .highlight_symbol(if focused { ">" } else { " " });

        let mut state = ListState::default();
        state.select(Some(self.cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
