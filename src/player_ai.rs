use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::BOARD_SIZE;
use crate::geometry::Point;
use crate::player::Strategy;

/// Opponent strategy: uniform-random targeting with no memory of prior
/// shots. Repeats are rejected by the board and simply retried.
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select_target(&mut self, rng: &mut SmallRng) -> Option<Point> {
        Some(Point::new(
            rng.random_range(0..BOARD_SIZE),
            rng.random_range(0..BOARD_SIZE),
        ))
    }
}
