use crate::Game;
use crossterm::event::KeyEvent;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, trace};

use super::direction::Direction;
use super::food::{FoodSource, RandomFood};
use super::position::Bounds;
use super::renderer::SnakeRenderer;
use super::state::{SnakeState, TickEvent};

/// Single-player snake in the terminal.
pub struct SnakeGame<F = RandomFood<StdRng>> {
    state: SnakeState,
    food_source: F,
    /// Play area seen by the last frame; `None` until something has been drawn
    surface: Option<Bounds>,
    ticks: u64,
}

impl SnakeGame {
    /// New game with food placement seeded from `seed`, or from the OS when absent.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_food_source(RandomFood::new(rng))
    }
}

impl<F: FoodSource> SnakeGame<F> {
    pub fn with_food_source(food_source: F) -> Self {
        Self::with_state(SnakeState::default(), food_source)
    }

    pub fn with_state(state: SnakeState, food_source: F) -> Self {
        Self {
            state,
            food_source,
            surface: None,
            ticks: 0,
        }
    }

    pub fn state(&self) -> &SnakeState {
        &self.state
    }

    pub fn surface(&self) -> Option<Bounds> {
        self.surface
    }
}

impl<F: FoodSource> Game for SnakeGame<F> {
    type Summary = GameSummary;

    /// The clock stops once the game is over
    fn tick_rate(&self) -> Option<Duration> {
        (!self.state.is_game_over()).then(|| self.state.tick_interval())
    }

    fn on_tick(&mut self) {
        match self.state.tick(self.surface, &mut self.food_source) {
            TickEvent::Skipped => {
                debug!(game_over = self.state.is_game_over(), "tick skipped");
                return;
            }
            TickEvent::Moved { head } => trace!(x = head.x, y = head.y, "moved"),
            TickEvent::Ate { head, points } => {
                let food = self.state.food();
                info!(
                    x = head.x,
                    y = head.y,
                    points,
                    score = self.state.score(),
                    speed = self.state.speed(),
                    next_food = ?(food.x, food.y),
                    "food eaten"
                );
            }
            TickEvent::Collided { at } => {
                info!(
                    x = at.x,
                    y = at.y,
                    score = self.state.score(),
                    length = self.state.snake().len(),
                    "game over"
                );
            }
        }
        self.ticks += 1;
    }

    fn handle_input(&mut self, event: KeyEvent) {
        let Some(direction) = Direction::from_key(event.code) else {
            return;
        };
        let from = self.state.direction();
        if self.state.steer(direction) {
            debug!(?from, to = ?direction, "direction changed");
        } else {
            trace!(?from, rejected = ?direction, "direction refused");
        }
    }

    fn render(&mut self, frame: &mut ratatui::Frame) {
        self.surface = SnakeRenderer::render(frame, &self.state);
    }

    fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.state.score(),
            length: self.state.snake().len(),
            speed: self.state.speed(),
            ticks: self.ticks,
            game_over: self.state.is_game_over(),
        }
    }
}

/// What is printed once the terminal has been restored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub score: u32,
    pub length: usize,
    pub speed: u8,
    pub ticks: u64,
    pub game_over: bool,
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.game_over { "Game over" } else { "Quit" };
        write!(
            f,
            "{outcome}. Score: {}, length: {}, speed: {}, ticks: {}",
            self.score, self.length, self.speed, self.ticks
        )
    }
}
