//! Strategy interface implemented by the different player types.

use rand::rngs::SmallRng;

use crate::common::{BoardError, ShotOutcome};
use crate::geometry::Point;

/// A point-selection policy consumed by the turn controller.
pub trait Strategy {
    /// Choose the next target on the opponent's board. Returning `None`
    /// signals end of input and aborts the game.
    fn select_target(&mut self, rng: &mut SmallRng) -> Option<Point>;

    /// Inform the strategy of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Point, _outcome: ShotOutcome) {}

    /// Inform the strategy that its last shot was rejected; the same side
    /// retries.
    fn handle_shot_error(&mut self, _target: Point, _err: &BoardError) {}

    /// Inform the strategy of a shot landed on its own board.
    fn handle_incoming_shot(&mut self, _target: Point, _outcome: ShotOutcome) {}
}
