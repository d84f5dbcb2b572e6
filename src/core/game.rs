//! Core game interface driven by the engine loop
use crossterm::event::KeyEvent;
use serde::Serialize;
use std::time::Duration;

/// Main game trait that every terminal game implements.
///
/// The engine calls these from a single task: input and ticks never overlap,
/// and every call runs to completion before the next one starts.
pub trait Game {
    /// Summary handed back to the caller once the engine stops
    type Summary: Serialize + std::fmt::Display;

    /// Period between ticks, or `None` when the game no longer needs a clock
    fn tick_rate(&self) -> Option<Duration>;

    /// Advance the game by one step
    fn on_tick(&mut self);

    /// React to a key press (quit keys are handled by the engine)
    fn handle_input(&mut self, event: KeyEvent);

    /// Draw the current state into the Ratatui frame
    fn render(&mut self, frame: &mut ratatui::Frame);

    fn summary(&self) -> Self::Summary;
}
