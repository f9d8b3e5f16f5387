//! Module trait for the sidebar and content components

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::{Action, Context};

/// A focusable piece of the shell
pub trait Module {
    fn id(&self) -> &'static str;

    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action;

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context, focused: bool);
}
