pub const BOARD_SIZE: i32 = 6;

/// Ship lengths placed by the generator, in placement order (longest first).
pub const FLEET_LENGTHS: [i32; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Total random placement attempts allowed for one board before the
/// generator gives up and the caller restarts from an empty board.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 2000;
