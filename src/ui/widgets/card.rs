//! Placeholder card used by every screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::modules::screens::Card;

/// Centered glyph, title and caption inside a border
pub struct PlaceholderCard<'a> {
    card: &'a Card,
    highlighted: bool,
}

impl<'a> PlaceholderCard<'a> {
    pub fn new(card: &'a Card) -> Self {
        Self {
            card,
            highlighted: false,
        }
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }
}

impl<'a> Widget for PlaceholderCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let border_style = if self.highlighted {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        // Push content toward the vertical middle
        let inner_height = area.height.saturating_sub(2) as usize;
        let top_pad = inner_height.saturating_sub(4) / 2;

        let mut lines: Vec<Line> = std::iter::repeat(Line::from(""))
            .take(top_pad)
            .collect();
        lines.push(Line::from(Span::styled(
            self.card.glyph,
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            self.card.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            self.card.caption,
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Card = Card {
        glyph: "$",
        title: "Guest Billing",
        caption: "Manage room charges",
    };

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.get(x, y).symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_title_inside_border() {
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        PlaceholderCard::new(&CARD).render(area, &mut buf);

        let all: Vec<String> = (0..area.height).map(|y| row_text(&buf, y)).collect();
        assert!(all.iter().any(|row| row.contains("Guest Billing")));
        assert!(all.iter().any(|row| row.contains("Manage room charges")));
    }

    #[test]
    fn test_too_small_area_is_left_blank() {
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        PlaceholderCard::new(&CARD).render(area, &mut buf);
        assert_eq!(row_text(&buf, 0).trim(), "");
    }
}
