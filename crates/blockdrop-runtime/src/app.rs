use std::time::Duration;

use crossterm::event::Event;
use ratatui::Frame;

use crate::Runtime;

/// Trait for terminal applications driven by [`Runtime::run`].
pub trait App {
    /// Called once before the first event. Use this to configure the tick
    /// interval and render mode.
    fn init(&mut self, runtime: &mut Runtime);

    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    fn draw(&self, frame: &mut Frame);

    /// Advances application state.
    ///
    /// `elapsed` is the time since the previous tick, which may drift from
    /// the configured interval when rendering or input handling is slow.
    fn update(&mut self, runtime: &mut Runtime, elapsed: Duration);
}
