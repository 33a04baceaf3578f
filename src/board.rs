//! Game board state: one hit mask plus one footprint mask per ship.
//!
//! Nothing per-cell is stored. What a cell shows is derived on demand from the
//! hit mask and the ship masks, so a board loaded from disk renders exactly
//! like the one that was saved.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::bitboard::{BitBoard, BitBoardError};
use crate::common::BoardError;
use crate::config::BOARD_SIZE;

/// Bitboard type used for every board mask.
pub type Mask = BitBoard<u64, BOARD_SIZE>;

/// What a single cell shows, derived from hits and ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Not fired at, no ship.
    None,
    /// Ship cell that has not been fired at.
    Unhit,
    /// Ship cell that has been fired at while the ship still has un-hit cells.
    Hit,
    /// Ship cell of a ship whose every cell has been fired at.
    HitSunk,
    /// Fired at, no ship.
    Miss,
}

/// Returns `true` when `candidate` may be added next to the ship cells in
/// `placed`: it must occupy at least one cell and share none with them.
#[inline]
pub fn can_place(candidate: Mask, placed: Mask) -> bool {
    candidate.any() && !candidate.intersects(&placed)
}

/// Main board state: ship footprints and the cells fired upon.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    hits: Mask,
    ships: Vec<Mask>,
    all_ships: Mask,
    is_complex: bool,
}

impl Board {
    /// Create an empty board (no ships, no hits).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from stored masks, refusing overlapping or empty ships.
    pub fn from_parts(hits: Mask, ships: Vec<Mask>) -> Result<Self, BoardError> {
        let mut placed = Mask::new();
        for ship in &ships {
            if ship.is_empty() {
                return Err(BoardError::EmptyShip);
            }
            if ship.intersects(&placed) {
                return Err(BoardError::ShipOverlaps);
            }
            placed |= *ship;
        }
        let mut board = Board {
            hits,
            ships,
            ..Board::default()
        };
        board.recompute_caches();
        Ok(board)
    }

    /// Every cell that has been fired at.
    pub fn hits(&self) -> Mask {
        self.hits
    }

    /// Ship footprints in placement order.
    pub fn ships(&self) -> &[Mask] {
        &self.ships
    }

    /// Mutable access to the ship list.
    ///
    /// The cached union and complexity flag are not refreshed; call
    /// [`Board::recompute_caches`] once the list has been edited.
    pub fn ships_mut(&mut self) -> &mut Vec<Mask> {
        &mut self.ships
    }

    /// Union of all ship footprints, as of the last cache refresh.
    pub fn all_ships(&self) -> Mask {
        self.all_ships
    }

    /// Whether any ship spans more than one cell, as of the last cache refresh.
    pub fn is_complex(&self) -> bool {
        self.is_complex
    }

    /// Recompute the cached ship union and complexity flag from the ship list.
    pub fn recompute_caches(&mut self) {
        self.all_ships = Mask::new();
        self.is_complex = false;
        for ship in &self.ships {
            self.all_ships |= *ship;
            if ship.count_ones() > 1 {
                self.is_complex = true;
            }
        }
    }

    /// Whether `candidate` can be added without touching an existing ship.
    pub fn fits(&self, candidate: Mask) -> bool {
        can_place(candidate, self.all_ships)
    }

    /// Append a ship after checking it against those already placed.
    pub fn add_ship(&mut self, ship: Mask) -> Result<(), BoardError> {
        if ship.is_empty() {
            return Err(BoardError::EmptyShip);
        }
        if !self.fits(ship) {
            return Err(BoardError::ShipOverlaps);
        }
        self.ships.push(ship);
        self.recompute_caches();
        Ok(())
    }

    /// Cell counts of each ship, in placement order.
    pub fn ship_sizes(&self) -> Vec<usize> {
        self.ships.iter().map(|s| s.count_ones()).collect()
    }

    /// Number of ships that still have at least one un-hit cell.
    pub fn ships_remaining(&self) -> usize {
        self.ships
            .iter()
            .filter(|s| (**s & !self.hits).any())
            .count()
    }

    /// State of the cell at (`x`, `y`).
    pub fn cell_state(&self, x: usize, y: usize) -> Result<CellState, BitBoardError> {
        Ok(self.state_of(Mask::cell(x, y)?))
    }

    fn state_of(&self, cell: Mask) -> CellState {
        if self.hits.intersects(&cell) {
            for ship in &self.ships {
                if ship.intersects(&cell) && (*ship & !self.hits).is_empty() {
                    return CellState::HitSunk;
                }
            }
            if self.all_ships.intersects(&cell) {
                CellState::Hit
            } else {
                CellState::Miss
            }
        } else if self.all_ships.intersects(&cell) {
            CellState::Unhit
        } else {
            CellState::None
        }
    }

    /// Snapshot of every cell, indexed `[y][x]`.
    pub fn grid(&self) -> [[CellState; BOARD_SIZE]; BOARD_SIZE] {
        core::array::from_fn(|y| {
            core::array::from_fn(|x| self.state_of(Mask::from_raw(1u64 << (x + y * BOARD_SIZE))))
        })
    }

    /// States of row `y`, left to right.
    pub fn row(&self, y: usize) -> Result<impl Iterator<Item = CellState> + '_, BitBoardError> {
        if y >= BOARD_SIZE {
            return Err(BitBoardError::IndexOutOfBounds { x: 0, y });
        }
        Ok((0..BOARD_SIZE).map(move |x| self.state_of(Mask::from_raw(1u64 << (x + y * BOARD_SIZE)))))
    }

    /// Index into [`ships`](Self::ships) of the ship covering (`x`, `y`).
    pub fn ship_at(&self, x: usize, y: usize) -> Result<Option<usize>, BitBoardError> {
        let cell = Mask::cell(x, y)?;
        Ok(self.ships.iter().position(|s| s.intersects(&cell)))
    }

    /// Fire at (`x`, `y`). Returns `true` if the cell had not been fired at
    /// before; firing twice leaves the board unchanged.
    pub fn mark_hit(&mut self, x: usize, y: usize) -> Result<bool, BitBoardError> {
        let fresh = !self.hits.get(x, y)?;
        self.hits.set(x, y)?;
        Ok(fresh)
    }

    /// `true` once no ship cell is left un-hit. A board without ships counts
    /// as won.
    pub fn is_won(&self) -> bool {
        (self.all_ships & !self.hits).is_empty()
    }
}
