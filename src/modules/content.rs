//! Content area - renders the routed screen as a grid of cards

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module, NotifyLevel};
use crate::modules::screens::{screen, Screen};
use crate::ui::widgets::PlaceholderCard;

const GRID_COLUMNS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct ContentPanel {
    active_card: usize,
}

impl ContentPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_card(&self) -> usize {
        self.active_card
    }

    /// Called whenever the view changes
    pub fn reset(&mut self) {
        self.active_card = 0;
    }

    pub fn next_card(&mut self, screen: &Screen) {
        let len = screen.cards.len().max(1);
        self.active_card = (self.active_card + 1) % len;
    }

    pub fn prev_card(&mut self, screen: &Screen) {
        let len = screen.cards.len().max(1);
        self.active_card = (self.active_card + len - 1) % len;
    }
}

impl Module for ContentPanel {
    fn id(&self) -> &'static str {
        "content"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        let current = screen(ctx.view());
        match key.code {
            KeyCode::Right | KeyCode::Down | KeyCode::Char('j') => {
                self.next_card(current);
                Action::None
            }
            KeyCode::Left | KeyCode::Up | KeyCode::Char('k') => {
                self.prev_card(current);
                Action::None
            }
            KeyCode::Enter => match current.card(self.active_card) {
                Some(card) => Action::Notify(
                    format!("{} is not available yet", card.title),
                    NotifyLevel::Warn,
                ),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context, focused: bool) {
        let current = screen(ctx.view());

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(inner);

        let heading = Paragraph::new(vec![
            Line::from(Span::styled(
                current.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                current.subtitle,
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(heading, chunks[0]);

        let rows = current.cards.len().div_ceil(GRID_COLUMNS).max(1);
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
            .split(chunks[1]);

        for (row_idx, row) in current.cards.chunks(GRID_COLUMNS).enumerate() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .split(row_areas[row_idx]);

            for (col_idx, card) in row.iter().enumerate() {
                let index = row_idx * GRID_COLUMNS + col_idx;
                frame.render_widget(
                    PlaceholderCard::new(card).highlighted(focused && index == self.active_card),
                    columns[col_idx],
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{Role, ViewId};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_card_focus_wraps() {
        let ctx = Context::with(Role::Manager, ViewId::Billing);
        let mut panel = ContentPanel::new();
        panel.handle_key(key(KeyCode::Left), &ctx);
        assert_eq!(panel.active_card(), 2);
        panel.handle_key(key(KeyCode::Right), &ctx);
        assert_eq!(panel.active_card(), 0);
    }

    #[test]
    fn test_enter_on_card_reports_placeholder() {
        let ctx = Context::with(Role::Manager, ViewId::Events);
        let mut panel = ContentPanel::new();
        assert_eq!(
            panel.handle_key(key(KeyCode::Enter), &ctx),
            Action::Notify(
                "Event Calendar is not available yet".to_string(),
                NotifyLevel::Warn
            )
        );
    }
}
