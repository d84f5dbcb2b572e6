//! Where food goes after it is eaten

use rand::Rng;
use rand_core::RngCore;

use super::position::{Bounds, Position};

/// Picks the next food position inside the given bounds.
pub trait FoodSource {
    fn place(&mut self, bounds: Bounds) -> Position;
}

/// Uniform placement over `[0, width) x [0, height)`, backed by any RNG.
#[derive(Debug, Clone)]
pub struct RandomFood<R> {
    rng: R,
}

impl<R: RngCore> RandomFood<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> FoodSource for RandomFood<R> {
    fn place(&mut self, bounds: Bounds) -> Position {
        Position::new(
            self.rng.random_range(0..bounds.width()),
            self.rng.random_range(0..bounds.height()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_placement_stays_in_bounds() {
        let bounds = Bounds::new(37, 23).unwrap();
        let mut food = RandomFood::new(StdRng::seed_from_u64(7));
        for _ in 0..1000 {
            let pos = food.place(bounds);
            assert!((0..37).contains(&pos.x), "x out of range: {pos:?}");
            assert!((0..23).contains(&pos.y), "y out of range: {pos:?}");
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let bounds = Bounds::new(400, 300).unwrap();
        let mut a = RandomFood::new(StdRng::seed_from_u64(42));
        let mut b = RandomFood::new(StdRng::seed_from_u64(42));
        for _ in 0..20 {
            assert_eq!(a.place(bounds), b.place(bounds));
        }
    }

    #[test]
    fn test_single_unit_area() {
        let bounds = Bounds::new(1, 1).unwrap();
        let mut food = RandomFood::new(StdRng::seed_from_u64(0));
        assert_eq!(food.place(bounds), Position::new(0, 0));
    }
}
