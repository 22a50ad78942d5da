//! Randomized fleet placement.

use rand::Rng;

use crate::board::Board;
use crate::config::{BOARD_SIZE, FLEET_LENGTHS, MAX_PLACEMENT_ATTEMPTS};
use crate::geometry::Point;
use crate::ship::{Orientation, Ship};

/// Attempt to place the whole fleet on an empty board of `size`. Returns
/// `None` when the shared retry budget runs out, signalling the caller to
/// start over from an empty board.
pub fn try_place_fleet<R: Rng + ?Sized>(rng: &mut R, size: i32) -> Option<Board> {
    let mut board = Board::new(size);
    let mut attempts: u32 = 0;
    for &length in FLEET_LENGTHS.iter() {
        loop {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                log::debug!("placement budget exhausted, restarting from an empty board");
                return None;
            }
            let bow = Point::new(rng.random_range(0..size), rng.random_range(0..size));
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if board.add_ship(Ship::new(bow, length, orientation)).is_ok() {
                break;
            }
        }
    }
    log::debug!("fleet placed after {} attempts", attempts);
    board.begin_play();
    Some(board)
}

/// Generate a playable board, retrying until fleet placement succeeds.
/// Failure probability per attempt is low for the default fleet, so the
/// loop is unbounded.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    loop {
        if let Some(board) = try_place_fleet(rng, BOARD_SIZE) {
            return board;
        }
    }
}
