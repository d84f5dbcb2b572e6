//! Fixed rules of the game. Board size comes from the terminal; nothing here is configurable.

use super::position::Position;

/// Distance covered by one move, and the size of one segment
pub const SEGMENT_SIZE: i32 = 10;

/// Tick period at speed 1, in milliseconds
pub const BASE_TICK_MS: u64 = 200;

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 3;

/// Head and food closer than this on both axes count as a meal
pub const EAT_RADIUS: i32 = 5;

/// Points per meal are `speed * POINTS_PER_SPEED`
pub const POINTS_PER_SPEED: u32 = 10;

/// A head at or past `extent - WRAP_HIGH_INSET` jumps back to 0
pub const WRAP_HIGH_INSET: i32 = 10;

/// Landing column when wrapping off the left edge (`width - 12`)
pub const WRAP_LOW_X_INSET: i32 = 12;

/// Landing row when wrapping off the bottom edge (`height - 10`)
pub const WRAP_LOW_Y_INSET: i32 = 10;

pub const INITIAL_SNAKE: [Position; 2] = [Position::new(20, 10), Position::new(10, 10)];

pub const INITIAL_FOOD: Position = Position::new(40, 20);
