//! Ship type: a bow cell, a length and an orientation.

use crate::geometry::Point;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship anchored at its bow, extending `length` cells along its
/// orientation. Remaining hit points start at `length` and reach zero
/// when the ship is sunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Point,
    length: i32,
    orientation: Orientation,
    remaining_hits: i32,
}

impl Ship {
    pub fn new(bow: Point, length: i32, orientation: Orientation) -> Self {
        Self {
            bow,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    pub fn bow(&self) -> Point {
        self.bow
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn remaining_hits(&self) -> i32 {
        self.remaining_hits
    }

    /// The cells this ship occupies, derived from bow, length and
    /// orientation. Never stored separately.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => Point::new(self.bow.row, self.bow.col + i),
            Orientation::Vertical => Point::new(self.bow.row + i, self.bow.col),
        })
    }

    /// Whether a shot at `point` strikes this ship.
    pub fn is_hit_by(&self, point: Point) -> bool {
        self.cells().any(|c| c == point)
    }

    /// Record one confirmed hit.
    pub fn take_hit(&mut self) {
        self.remaining_hits = self.remaining_hits.saturating_sub(1);
    }

    /// All segments hit.
    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }
}
