//! Common types: board errors and shot outcomes.

/// Outcome of a legal shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot missed every ship.
    Miss,
    /// Shot hit a ship without sinking it.
    Wound,
    /// Shot sank a ship.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shot hit a ship segment.
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }

    /// Whether the shooter keeps the turn. A wound grants an extra shot;
    /// a sink or a miss passes the turn.
    pub fn repeat_turn(self) -> bool {
        matches!(self, ShotOutcome::Wound)
    }
}

impl core::fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "Miss!"),
            ShotOutcome::Wound => write!(f, "Ship wounded!"),
            ShotOutcome::Sunk => write!(f, "Ship sunk!"),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship placement is out of bounds, overlaps another ship or its
    /// contour, or was attempted after play began.
    InvalidPlacement,
    /// Shot target lies outside the grid.
    OutOfBounds,
    /// Shot target was already consumed by an earlier shot.
    AlreadyTargeted,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidPlacement => write!(f, "Ship cannot be placed there"),
            BoardError::OutOfBounds => write!(f, "That shot is off the board"),
            BoardError::AlreadyTargeted => write!(f, "That cell was already targeted"),
        }
    }
}

impl std::error::Error for BoardError {}
