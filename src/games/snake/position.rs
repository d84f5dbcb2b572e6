//! Positions and play-area bounds, in pixel units

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::rules::{SEGMENT_SIZE, WRAP_HIGH_INSET, WRAP_LOW_X_INSET, WRAP_LOW_Y_INSET};

/// A point relative to the bottom-left corner of the play area; `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one segment away in `direction`, without any wrapping
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx * SEGMENT_SIZE, self.y + dy * SEGMENT_SIZE)
    }

    /// True when both axes are within `radius` of `other`
    pub fn is_near(self, other: Position, radius: i32) -> bool {
        (self.x - other.x).abs() <= radius && (self.y - other.y).abs() <= radius
    }
}

/// Size of the play area. Both sides are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    /// `None` when the surface has no area (not laid out yet, or squeezed to nothing)
    pub fn new(width: i32, height: i32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Bring a head that left the area back in.
    ///
    /// The checks form one priority chain (right, top, left, bottom) and only
    /// the first matching edge is corrected. The left edge lands at
    /// `width - 12` while the bottom edge lands at `height - 10`.
    pub fn wrap(&self, mut pos: Position) -> Position {
        if pos.x >= self.width - WRAP_HIGH_INSET {
            pos.x = 0;
        } else if pos.y >= self.height - WRAP_HIGH_INSET {
            pos.y = 0;
        } else if pos.x < 0 {
            pos.x = self.width - WRAP_LOW_X_INSET;
        } else if pos.y < 0 {
            pos.y = self.height - WRAP_LOW_Y_INSET;
        }
        pos
    }
}

#[derive(Deserialize)]
struct RawBounds {
    width: i32,
    height: i32,
}

impl TryFrom<RawBounds> for Bounds {
    type Error = String;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Bounds::new(raw.width, raw.height)
            .ok_or_else(|| format!("bounds must be positive, got {}x{}", raw.width, raw.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(width: i32, height: i32) -> Bounds {
        Bounds::new(width, height).unwrap()
    }

    #[test]
    fn test_step() {
        let pos = Position::new(100, 100);
        assert_eq!(pos.step(Direction::Up), Position::new(100, 110));
        assert_eq!(pos.step(Direction::Down), Position::new(100, 90));
        assert_eq!(pos.step(Direction::Left), Position::new(90, 100));
        assert_eq!(pos.step(Direction::Right), Position::new(110, 100));
    }

    #[test]
    fn test_is_near() {
        let food = Position::new(40, 20);
        assert!(Position::new(40, 20).is_near(food, 5));
        assert!(Position::new(45, 15).is_near(food, 5));
        assert!(!Position::new(46, 20).is_near(food, 5));
        assert!(!Position::new(40, 26).is_near(food, 5));
    }

    #[test]
    fn test_empty_bounds_rejected() {
        assert!(Bounds::new(0, 100).is_none());
        assert!(Bounds::new(100, 0).is_none());
        assert!(Bounds::new(-10, 100).is_none());
        assert_eq!(Bounds::new(100, 50).map(|b| (b.width(), b.height())), Some((100, 50)));
    }

    #[test]
    fn test_wrap_right_edge() {
        let b = bounds(100, 100);
        assert_eq!(b.wrap(Position::new(105, 40)), Position::new(0, 40));
        // The right edge triggers 10 units early
        assert_eq!(b.wrap(Position::new(90, 40)), Position::new(0, 40));
        assert_eq!(b.wrap(Position::new(89, 40)), Position::new(89, 40));
    }

    #[test]
    fn test_wrap_left_edge_is_asymmetric() {
        let b = bounds(100, 100);
        assert_eq!(b.wrap(Position::new(-5, 40)), Position::new(88, 40));
        assert_eq!(b.wrap(Position::new(40, -10)), Position::new(40, 90));
    }

    #[test]
    fn test_wrap_top_edge() {
        let b = bounds(100, 60);
        assert_eq!(b.wrap(Position::new(40, 50)), Position::new(40, 0));
        assert_eq!(b.wrap(Position::new(40, 49)), Position::new(40, 49));
    }

    #[test]
    fn test_wrap_corrects_one_axis_only() {
        let b = bounds(100, 100);
        // Right wins over top; y stays out of range until a later tick
        assert_eq!(b.wrap(Position::new(95, 95)), Position::new(0, 95));
        // Top wins over left
        assert_eq!(b.wrap(Position::new(-10, 95)), Position::new(-10, 0));
        // Left wins over bottom
        assert_eq!(b.wrap(Position::new(-10, -10)), Position::new(88, -10));
    }

    #[test]
    fn test_deserialize_checks_bounds() {
        let bounds: Bounds = serde_json::from_str(r#"{"width":120,"height":80}"#).unwrap();
        assert_eq!((bounds.width(), bounds.height()), (120, 80));

        assert!(serde_json::from_str::<Bounds>(r#"{"width":0,"height":50}"#).is_err());
        assert!(serde_json::from_str::<Bounds>(r#"{"width":50,"height":-10}"#).is_err());
    }
}
