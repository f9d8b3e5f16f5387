use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::nav::Role;

pub const SIDEBAR_WIDTH: u16 = 30;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub sidebar: Rect,
    pub roles: Rect,
    pub menu: Rect,
    pub content: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(vertical[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(Role::ALL.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(main_chunks[0]);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[2]);

    UiAreas {
        size,
        header: vertical[0],
        sidebar: main_chunks[0],
        roles: sidebar_chunks[0],
        menu: sidebar_chunks[1],
        content: main_chunks[1],
        status_line: footer_chunks[0],
        command_line: footer_chunks[1],
    }
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

/// Row index inside a bordered list, if the point is on one
pub fn list_row_at(rect: Rect, col: u16, row: u16) -> Option<usize> {
    let inner = rect_inner(rect);
    if !rect_contains(inner, col, row) {
        return None;
    }
    Some((row - inner.y) as usize)
}

/// First visible row of a list that keeps `selected` on screen
pub fn list_offset(selected: usize, visible_height: usize) -> usize {
    let visible_height = visible_height.max(1);
    if selected >= visible_height {
        selected.saturating_sub(visible_height.saturating_sub(1))
    } else {
        0
    }
}
