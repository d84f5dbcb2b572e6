//! Snake: grow by eating, wrap at the edges, lose by biting yourself

pub mod direction;
pub mod food;
pub mod game;
pub mod position;
pub mod renderer;
pub mod rules;
pub mod state;

pub use direction::Direction;
pub use food::{FoodSource, RandomFood};
pub use game::{GameSummary, SnakeGame};
pub use position::{Bounds, Position};
pub use renderer::SnakeRenderer;
pub use state::{SnakeState, TickEvent};
