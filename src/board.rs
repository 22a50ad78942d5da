//! Game board state: ship placement, contour reservation and shot
//! resolution.

use std::collections::HashSet;

use crate::common::{BoardError, ShotOutcome};
use crate::geometry::Point;
use crate::ship::Ship;

/// Rendering state of one grid cell. Derived from ship and shot history,
/// never consulted for rule decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
    /// Contour of a sunk ship, sealed against further shots.
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Setup,
    Play,
}

/// A single side's board. Constructed empty, mutated through `add_ship`
/// during setup and `shoot` during play; `begin_play` separates the two
/// phases.
#[derive(Debug, Clone)]
pub struct Board {
    size: i32,
    grid: Vec<Cell>,
    ships: Vec<Ship>,
    /// Cells reserved during setup: ship cells plus their contour.
    reserved: HashSet<Point>,
    /// Cells consumed during play: every legal shot plus the sealed
    /// contour of sunk ships.
    targeted: HashSet<Point>,
    phase: Phase,
    sunk_count: usize,
}

impl Board {
    pub fn new(size: i32) -> Self {
        Self {
            size,
            grid: vec![Cell::Empty; (size * size) as usize],
            ships: Vec::new(),
            reserved: HashSet::new(),
            targeted: HashSet::new(),
            phase: Phase::Setup,
            sunk_count: 0,
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Rendering state of the cell at `point`, or `None` off the board.
    pub fn cell(&self, point: Point) -> Option<Cell> {
        if self.is_out_of_bounds(point) {
            return None;
        }
        Some(self.grid[self.index(point)])
    }

    pub fn is_out_of_bounds(&self, point: Point) -> bool {
        !(0..self.size).contains(&point.row) || !(0..self.size).contains(&point.col)
    }

    fn index(&self, point: Point) -> usize {
        (point.row * self.size + point.col) as usize
    }

    /// Reserve every in-bounds cell adjacent to `ship`, diagonals
    /// included. With `mark` set (sunk ship) the freshly reserved cells
    /// are sealed in the grid as `Blocked`.
    fn compute_contour(&mut self, ship: &Ship, mark: bool) {
        for cell in ship.cells() {
            for dr in -1..=1 {
                for dc in -1..=1 {
                    let near = Point::new(cell.row + dr, cell.col + dc);
                    if self.is_out_of_bounds(near) {
                        continue;
                    }
                    let occupied = match self.phase {
                        Phase::Setup => &mut self.reserved,
                        Phase::Play => &mut self.targeted,
                    };
                    if occupied.insert(near) && mark {
                        let i = self.index(near);
                        self.grid[i] = Cell::Blocked;
                    }
                }
            }
        }
    }

    /// Place a ship. Fails if any cell is out of bounds, overlaps another
    /// ship or its contour, or if play has already begun. On success the
    /// ship's cells and surrounding contour are reserved, so no later
    /// ship can touch this one, not even diagonally.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if self.phase != Phase::Setup {
            return Err(BoardError::InvalidPlacement);
        }
        for cell in ship.cells() {
            if self.is_out_of_bounds(cell) || self.reserved.contains(&cell) {
                return Err(BoardError::InvalidPlacement);
            }
        }
        for cell in ship.cells() {
            let i = self.index(cell);
            self.grid[i] = Cell::Ship;
            self.reserved.insert(cell);
        }
        self.ships.push(ship);
        self.compute_contour(&ship, false);
        Ok(())
    }

    /// End the setup phase. Placement reservations are discarded so that
    /// shot bookkeeping starts from a clean set.
    pub fn begin_play(&mut self) {
        self.reserved.clear();
        self.phase = Phase::Play;
    }

    /// Resolve a shot at `point`. Every legal shot, hit or miss, is
    /// permanently consumed. Sinking a ship seals its contour as shot
    /// cells as well.
    pub fn shoot(&mut self, point: Point) -> Result<ShotOutcome, BoardError> {
        if self.is_out_of_bounds(point) {
            return Err(BoardError::OutOfBounds);
        }
        if self.targeted.contains(&point) {
            return Err(BoardError::AlreadyTargeted);
        }
        self.targeted.insert(point);

        // At most one ship can contain the point, by the placement invariant.
        if let Some(idx) = self.ships.iter().position(|s| s.is_hit_by(point)) {
            let i = self.index(point);
            self.grid[i] = Cell::Hit;
            self.ships[idx].take_hit();
            if self.ships[idx].is_sunk() {
                self.sunk_count += 1;
                let ship = self.ships[idx];
                self.compute_contour(&ship, true);
                return Ok(ShotOutcome::Sunk);
            }
            return Ok(ShotOutcome::Wound);
        }

        let i = self.index(point);
        self.grid[i] = Cell::Miss;
        Ok(ShotOutcome::Miss)
    }

    /// Whether every ship on this board has been sunk.
    pub fn is_defeated(&self) -> bool {
        self.sunk_count == self.ships.len()
    }
}
