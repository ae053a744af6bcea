//! Module trait for the section panels

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::{Action, Context};

/// Trait for section panels that handle input and render themselves
pub trait Module {
    /// Title shown in the sidebar
    fn title(&self) -> &'static str;

    /// Handle keyboard input.
    /// Returns an Action describing what should happen.
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action;

    /// Render the section into the given area
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context);
}
