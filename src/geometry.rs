//! Coordinate type used by boards, ships and strategies.

/// A cell position as (row, column). Coordinates are 0-based; signed so
/// that contour neighbours of edge cells can be formed before the bounds
/// check rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}
