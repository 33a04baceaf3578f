//! Ship definitions and straight-line footprints built from our `BitBoard`.

use rand::Rng;

use crate::bitboard::Direction;
use crate::board::Mask;
use crate::common::BoardError;
use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Pick either orientation with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_range(0..2) == 0 {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// Direction a ship of this orientation extends from its first cell.
    pub fn direction(self) -> Direction {
        match self {
            Orientation::Horizontal => Direction::Right,
            Orientation::Vertical => Direction::Down,
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Footprint of a ship of `length` cells whose first cell is (`x`, `y`).
///
/// Unlike [`Mask::line`], a ship that would run off the board is rejected
/// instead of truncated.
pub fn ship_mask(
    x: usize,
    y: usize,
    orientation: Orientation,
    length: usize,
) -> Result<Mask, BoardError> {
    if length == 0 || length > BOARD_SIZE {
        return Err(BoardError::InvalidShipSize(length));
    }
    let mask = Mask::line(x, y, orientation.direction(), length - 1)?;
    if mask.count_ones() != length {
        return Err(BoardError::InvalidShipSize(length));
    }
    Ok(mask)
}

/// Footprint of the ship whose end cells are `start` and `end`.
///
/// Both cells must share a row or a column; `start == end` gives a one-cell
/// ship.
pub fn ship_between(start: (usize, usize), end: (usize, usize)) -> Result<Mask, BoardError> {
    let ((x0, y0), (x1, y1)) = (start, end);
    let (direction, length) = if y0 == y1 {
        if x1 < x0 {
            (Direction::Left, x0 - x1)
        } else {
            (Direction::Right, x1 - x0)
        }
    } else if x0 == x1 {
        if y1 < y0 {
            (Direction::Up, y0 - y1)
        } else {
            (Direction::Down, y1 - y0)
        }
    } else {
        return Err(BoardError::ShipNotStraight);
    };
    // the far end must exist on the board too
    Mask::cell(x1, y1)?;
    Ok(Mask::line(x0, y0, direction, length)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ship_between_any_end_order() {
        let forward = ship_between((1, 2), (4, 2)).unwrap();
        let backward = ship_between((4, 2), (1, 2)).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.count_ones(), 4);
    }

    #[test]
    fn ship_between_rejects_diagonals() {
        assert_eq!(
            ship_between((0, 0), (2, 2)).unwrap_err(),
            BoardError::ShipNotStraight
        );
    }

    #[test]
    fn ship_mask_rejects_overhang() {
        assert!(ship_mask(5, 0, Orientation::Horizontal, 3).is_ok());
        assert_eq!(
            ship_mask(6, 0, Orientation::Horizontal, 3).unwrap_err(),
            BoardError::InvalidShipSize(3)
        );
    }
}
