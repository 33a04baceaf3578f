//! Computer move selection against an opponent board.
//!
//! Each turn first hunts: the board is scanned column by column for a cell
//! showing [`CellState::Hit`], and the first open neighbour of such a cell
//! is fired at. When nothing is being hunted, a uniformly random open cell is
//! chosen instead. No state is kept between calls; everything is re-derived
//! from the board.

use core::fmt;

use rand::Rng;

use crate::bitboard::Direction;
use crate::board::{Board, CellState, Mask};
use crate::common::{BoardError, ShotOutcome};
use crate::config::{BOARD_SIZE, RANDOM_SHOT_ATTEMPTS};

/// A shot taken by the computer and what it achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub x: usize,
    pub y: usize,
    pub outcome: ShotOutcome,
}

impl fmt::Display for Shot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The computer shot at ({},{}). {}",
            self.x, self.y, self.outcome
        )
    }
}

/// Open neighbour of the first damaged, still floating ship cell.
///
/// Only boards with a ship longer than one cell are hunted; a hit on a
/// one-cell ship always sinks it. Cells are scanned with `x` in the outer
/// loop, and neighbours are tried up, down, left, right.
pub fn hunt_target(board: &Board) -> Option<(usize, usize)> {
    if !board.is_complex() {
        return None;
    }
    let grid = board.grid();
    let hits = board.hits();
    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            if grid[y][x] != CellState::Hit {
                continue;
            }
            let open = Direction::ALL
                .iter()
                .filter_map(|d| d.step(x, y, BOARD_SIZE))
                .find(|&(nx, ny)| matches!(hits.get(nx, ny), Ok(false)));
            if open.is_some() {
                return open;
            }
        }
    }
    None
}

/// A uniformly random cell that has not been fired at, or `None` if every
/// cell has been.
///
/// Random cells are drawn until an open one turns up; after
/// [`RANDOM_SHOT_ATTEMPTS`] misses the choice is made directly among the
/// remaining open cells.
pub fn random_target<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    let hits = board.hits();
    for _ in 0..RANDOM_SHOT_ATTEMPTS {
        let (cell, x, y) = Mask::random_cell(rng);
        if !cell.intersects(&hits) {
            return Some((x, y));
        }
    }
    let open = !hits;
    let remaining = open.count_ones();
    if remaining == 0 {
        return None;
    }
    let pick = rng.random_range(0..remaining);
    open.iter_set_bits().nth(pick)
}

/// Take the computer's turn against `board`, marking the chosen cell as hit.
///
/// Fails with [`BoardError::GameOver`] if the board is already won; callers
/// are expected to check [`Board::is_won`] between turns.
pub fn take_turn<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Result<Shot, BoardError> {
    if board.is_won() {
        return Err(BoardError::GameOver);
    }
    let (x, y) = match hunt_target(board) {
        Some(target) => {
            log::debug!("hunting next to a damaged ship at {:?}", target);
            target
        }
        None => random_target(board, rng).ok_or(BoardError::GameOver)?,
    };
    board.mark_hit(x, y)?;
    // a cell that has been fired at is always Miss, Hit or HitSunk
    let outcome = ShotOutcome::from_cell(board.cell_state(x, y)?).unwrap_or(ShotOutcome::Miss);
    log::debug!("computer fired at ({}, {}): {:?}", x, y, outcome);
    Ok(Shot { x, y, outcome })
}
