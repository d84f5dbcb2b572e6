//! Game state and the per-tick update

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

use super::direction::Direction;
use super::food::FoodSource;
use super::position::{Bounds, Position};
use super::rules::{
    BASE_TICK_MS, EAT_RADIUS, INITIAL_FOOD, INITIAL_SNAKE, MAX_SPEED, MIN_SPEED, POINTS_PER_SPEED,
};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Game already over, or no play area to move in
    Skipped,
    Moved { head: Position },
    Ate { head: Position, points: u32 },
    /// The head ran into the body; the game is over
    Collided { at: Position },
}

/// Everything the clock and the input mapper share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSnakeState")]
pub struct SnakeState {
    /// Head first
    snake: VecDeque<Position>,
    food: Position,
    direction: Direction,
    score: u32,
    speed: u8,
    game_over: bool,
}

impl Default for SnakeState {
    fn default() -> Self {
        Self {
            snake: VecDeque::from(INITIAL_SNAKE),
            food: INITIAL_FOOD,
            direction: Direction::default(),
            score: 0,
            speed: MIN_SPEED,
            game_over: false,
        }
    }
}

impl SnakeState {
    /// Start from an arbitrary layout. `snake` is head first; `None` if it has fewer than two segments.
    pub fn with_layout(snake: Vec<Position>, food: Position, direction: Direction) -> Option<Self> {
        if snake.len() < 2 {
            return None;
        }
        Some(Self {
            snake: snake.into(),
            food,
            direction,
            ..Self::default()
        })
    }

    pub fn snake(&self) -> &VecDeque<Position> {
        &self.snake
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// `200ms / speed`
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(BASE_TICK_MS) / u32::from(self.speed)
    }

    /// Turn the snake. Reversing onto itself is refused, and nothing changes once the game is over.
    ///
    /// Returns whether the direction was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.game_over || direction.is_opposite(self.direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Advance one step inside `bounds`, relocating eaten food with `food_source`.
    pub fn tick<F: FoodSource + ?Sized>(
        &mut self,
        bounds: Option<Bounds>,
        food_source: &mut F,
    ) -> TickEvent {
        if self.game_over {
            return TickEvent::Skipped;
        }
        let Some(bounds) = bounds else {
            return TickEvent::Skipped;
        };

        let next = self.head().step(self.direction);

        // Compared before wrapping, against the body as it was (tail included)
        if self.snake.iter().skip(1).any(|segment| *segment == next) {
            self.game_over = true;
            return TickEvent::Collided { at: next };
        }

        let head = bounds.wrap(next);
        self.snake.push_front(head);

        if head.is_near(self.food, EAT_RADIUS) {
            let points = u32::from(self.speed) * POINTS_PER_SPEED;
            self.food = food_source.place(bounds);
            self.score += points;
            if self.speed < MAX_SPEED {
                self.speed += 1;
            }
            TickEvent::Ate { head, points }
        } else {
            self.snake.pop_back();
            TickEvent::Moved { head }
        }
    }
}

#[derive(Deserialize)]
struct RawSnakeState {
    snake: Vec<Position>,
    food: Position,
    direction: Direction,
    score: u32,
    speed: u8,
    game_over: bool,
}

impl TryFrom<RawSnakeState> for SnakeState {
    type Error = String;

    fn try_from(raw: RawSnakeState) -> Result<Self, Self::Error> {
        if !(MIN_SPEED..=MAX_SPEED).contains(&raw.speed) {
            return Err(format!(
                "speed must be between {MIN_SPEED} and {MAX_SPEED}, got {}",
                raw.speed
            ));
        }
        let len = raw.snake.len();
        let state = SnakeState::with_layout(raw.snake, raw.food, raw.direction)
            .ok_or_else(|| format!("a snake needs at least two segments, got {len}"))?;
        Ok(SnakeState {
            score: raw.score,
            speed: raw.speed,
            game_over: raw.game_over,
            ..state
        })
    }
}
