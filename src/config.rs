use crate::ship::ShipType;

/// Width and height of every board.
pub const BOARD_SIZE: usize = 8;
/// Number of ships each player places.
pub const FLEET_SIZE: usize = 5;
/// Random placements tried per ship before the fleet generator backtracks.
pub const PLACEMENT_ATTEMPTS: usize = 32;
/// Rejected random shots before the targeting engine falls back to choosing
/// among the remaining open cells directly.
pub const RANDOM_SHOT_ATTEMPTS: usize = 256;
/// Fresh fleet generations a new game tries before giving up.
pub const GENERATION_RETRIES: usize = 8;
/// Directory that holds save files unless overridden on the command line.
pub const SAVE_DIR: &str = "games";

/// The classic fleet, used when a player's ships are placed automatically.
pub const SHIPS: [ShipType; FLEET_SIZE] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Ship lengths of [`SHIPS`] in placement order.
pub fn standard_fleet_sizes() -> [usize; FLEET_SIZE] {
    core::array::from_fn(|i| SHIPS[i].length())
}

/// Upper bound on candidate placements examined by one fleet generation,
/// across all levels of backtracking.
pub const PLACEMENT_BUDGET: usize = 1 << 16;
