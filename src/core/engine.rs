use crate::Game;
use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::{Stream, StreamExt};
use ratatui::backend::Backend;
use ratatui::{DefaultTerminal, Terminal};
use std::io;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

/// Drives a [`Game`]: draws frames, feeds it key presses and fires its ticks.
///
/// The key stream and the tick timer live inside [`Engine::run_with`], so both are
/// released together whichever way the loop ends.
pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Run on the real terminal until the player quits, then hand the game back.
    pub async fn run(self, terminal: &mut DefaultTerminal) -> Result<G> {
        self.run_with(terminal, EventStream::new()).await
    }

    /// Run against any backend and event source. Stops on a quit key or when
    /// `events` ends.
    pub async fn run_with<B, S>(mut self, terminal: &mut Terminal<B>, mut events: S) -> Result<G>
    where
        B: Backend,
        B::Error: Send + Sync + 'static,
        S: Stream<Item = io::Result<Event>> + Unpin,
    {
        let mut clock = TickClock::default();
        info!("engine started");

        loop {
            terminal.draw(|f| self.game.render(f))?;

            clock.sync(self.game.tick_rate(), Instant::now());
            let deadline = clock.deadline();

            tokio::select! {
                // INPUT: key presses, resizes (the next frame picks up the new area)
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            if is_quit(&key) {
                                debug!(code = ?key.code, "quit requested");
                                break;
                            }
                            self.game.handle_input(key);
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => return Err(e).context("failed to read terminal event"),
                        None => break,
                    }
                }

                // TICK: game heartbeat
                _ = wait_until(deadline) => {
                    self.game.on_tick();
                    clock.rearm(self.game.tick_rate(), Instant::now());
                }
            }
        }

        info!("engine stopped");
        Ok(self.game)
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending::<()>().await,
    }
}

/// Next tick deadline. Cleared whenever the game stops asking for ticks.
#[derive(Debug, Default)]
struct TickClock {
    deadline: Option<Instant>,
}

impl TickClock {
    /// Arm the clock if it is idle, or cancel it if the game no longer ticks.
    /// An armed deadline is left alone so input does not postpone the next tick.
    fn sync(&mut self, rate: Option<Duration>, now: Instant) {
        match rate {
            None => self.deadline = None,
            Some(period) if self.deadline.is_none() => self.deadline = Some(now + period),
            Some(_) => {}
        }
    }

    /// Schedule the tick after the one that just fired.
    fn rearm(&mut self, rate: Option<Duration>, now: Instant) {
        self.deadline = rate.map(|period| now + period);
    }

    fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
