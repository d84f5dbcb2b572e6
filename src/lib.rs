pub mod config;

pub mod core {
	pub mod engine;
	pub mod game;
	pub mod terminal;
}

pub mod games;

// Re-export for convenience
pub use crate::core::game::Game;
pub use crate::games::snake::SnakeGame;
