//! Random fleet generation by backtracking.
//!
//! Ships are placed in order. Each ship gets [`PLACEMENT_ATTEMPTS`] random
//! positions; after a position fits, the rest of the fleet is placed on top
//! of it, and if that fails the ship is moved and the rest tried again.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;

use crate::board::{Board, Mask};
use crate::common::BoardError;
use crate::config::{BOARD_SIZE, PLACEMENT_ATTEMPTS, PLACEMENT_BUDGET};
use crate::ship::{ship_mask, Orientation};

/// Build a board whose ships have the sizes in `sizes`, in that order, placed
/// at random without overlapping.
///
/// Returns [`BoardError::FleetExhausted`] when the search gives up; a retry
/// with fresh randomness may still succeed.
pub fn generate_fleet<R: Rng + ?Sized>(sizes: &[usize], rng: &mut R) -> Result<Board, BoardError> {
    if let Some(&bad) = sizes.iter().find(|&&s| s == 0 || s > BOARD_SIZE) {
        return Err(BoardError::InvalidShipSize(bad));
    }
    if sizes.iter().sum::<usize>() > BOARD_SIZE * BOARD_SIZE {
        return Err(BoardError::FleetExhausted);
    }
    let mut search = Search {
        ships: Vec::with_capacity(sizes.len()),
        budget: PLACEMENT_BUDGET,
    };
    if !search.place(sizes, Mask::new(), rng) {
        log::debug!("fleet generation exhausted for sizes {:?}", sizes);
        return Err(BoardError::FleetExhausted);
    }
    Board::from_parts(Mask::new(), search.ships)
}

/// Build a fresh board with the same ship sizes as `reference`.
pub fn generate_like<R: Rng + ?Sized>(reference: &Board, rng: &mut R) -> Result<Board, BoardError> {
    generate_fleet(&reference.ship_sizes(), rng)
}

struct Search {
    ships: Vec<Mask>,
    budget: usize,
}

impl Search {
    fn place<R: Rng + ?Sized>(&mut self, sizes: &[usize], placed: Mask, rng: &mut R) -> bool {
        let Some((&size, rest)) = sizes.split_first() else {
            return true;
        };
        for _ in 0..PLACEMENT_ATTEMPTS {
            if self.budget == 0 {
                return false;
            }
            self.budget -= 1;

            let line = rng.random_range(0..BOARD_SIZE);
            let orientation = Orientation::random(rng);
            let offset = rng.random_range(0..=BOARD_SIZE - size);
            let (x, y) = match orientation {
                Orientation::Vertical => (line, offset),
                Orientation::Horizontal => (offset, line),
            };
            let ship = match ship_mask(x, y, orientation, size) {
                Ok(ship) => ship,
                Err(_) => continue,
            };
            if ship.intersects(&placed) {
                continue;
            }
            self.ships.push(ship);
            if self.place(rest, placed | ship, rng) {
                return true;
            }
            self.ships.pop();
            log::trace!("backtracking ship {} (size {})", self.ships.len(), size);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_impossible_sizes() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            generate_fleet(&[3, 0], &mut rng).unwrap_err(),
            BoardError::InvalidShipSize(0)
        );
        assert_eq!(
            generate_fleet(&[9], &mut rng).unwrap_err(),
            BoardError::InvalidShipSize(9)
        );
        assert_eq!(
            generate_fleet(&[8; 9], &mut rng).unwrap_err(),
            BoardError::FleetExhausted
        );
    }

    #[test]
    fn unplaceable_fleet_is_exhausted() {
        // six full lines leave two free rows, which hold at most four 3-ships
        let sizes = [8, 8, 8, 8, 8, 8, 3, 3, 3, 3, 3];
        assert!(sizes.iter().sum::<usize>() <= BOARD_SIZE * BOARD_SIZE);
        for seed in 0..4 {
            let mut rng = SmallRng::seed_from_u64(seed);
            assert_eq!(
                generate_fleet(&sizes, &mut rng).unwrap_err(),
                BoardError::FleetExhausted
            );
        }
    }
}
