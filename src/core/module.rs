//! Module trait for screen components

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::{Action, Command, Context};
use crate::listing::FilterState;

/// A screen: owns its session state, reacts to input, draws itself.
pub trait Module {
    fn id(&self) -> &'static str;

    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action;

    /// Handle a `:` command that the app did not consume itself
    fn handle_command(&mut self, cmd: &Command, ctx: &mut Context) -> Action;

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context);

    /// Filter state edited by `/` search, if the screen has a search box
    fn filter_state(&self) -> Option<&FilterState> {
        None
    }

    fn filter_state_mut(&mut self) -> Option<&mut FilterState> {
        None
    }

    /// Called after the filter state changed from outside the module
    fn on_filter_changed(&mut self, _ctx: &Context) {}
}
