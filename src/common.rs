//! Common types for BattleBoats: board errors and shot outcomes.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::board::CellState;

/// What a single shot did, read back from the target cell after firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotOutcome {
    /// No ship at the target.
    Miss,
    /// A ship was struck but still has cells left afloat.
    Hit,
    /// The shot struck the last un-hit cell of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Outcome implied by the state of a cell that has just been fired at.
    ///
    /// Returns `None` for states a fired-upon cell cannot be in.
    pub fn from_cell(state: CellState) -> Option<Self> {
        match state {
            CellState::Miss => Some(ShotOutcome::Miss),
            CellState::Hit => Some(ShotOutcome::Hit),
            CellState::HitSunk => Some(ShotOutcome::Sunk),
            CellState::None | CellState::Unhit => None,
        }
    }

    /// Human-readable evaluation of the shot.
    pub fn evaluation(&self) -> &'static str {
        match self {
            ShotOutcome::Miss => "It's a miss.",
            ShotOutcome::Hit => "It's a hit, but the ship isn't sunk.",
            ShotOutcome::Sunk => "It's a hit, and the ship is sunk.",
        }
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.evaluation())
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// A ship footprint with no cells.
    EmptyShip,
    /// The two end cells of a ship are not in the same row or column.
    ShipNotStraight,
    /// A ship length that cannot fit on the board.
    InvalidShipSize(usize),
    /// Backtracking ran out of attempts before the whole fleet was placed.
    FleetExhausted,
    /// Every ship cell on the board has already been hit.
    GameOver,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::EmptyShip => write!(f, "Ship does not occupy any cells"),
            BoardError::ShipNotStraight => {
                write!(f, "Ship must lie within a single row or column")
            }
            BoardError::InvalidShipSize(len) => {
                write!(f, "Ship of length {} does not fit on the board", len)
            }
            BoardError::FleetExhausted => write!(f, "Unable to place every ship of the fleet"),
            BoardError::GameOver => write!(f, "Every ship on the board is already sunk"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
