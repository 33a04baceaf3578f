use battleboats::{generate_fleet, init_logging, standard_fleet_sizes, take_turn};
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

#[derive(Serialize)]
struct SideReport {
    shots: usize,
    ships_afloat: usize,
}

#[derive(Serialize)]
struct SimReport {
    player1: SideReport,
    player2: SideReport,
    winner: &'static str,
}

/// Computer against computer: both fleets are generated, then each side fires
/// in turn with the targeting engine until one fleet is sunk.
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let sizes = standard_fleet_sizes();
    let mut board1 = generate_fleet(&sizes, &mut rng1)?;
    let mut board2 = generate_fleet(&sizes, &mut rng2)?;

    let (mut shots1, mut shots2) = (0usize, 0usize);
    let winner = loop {
        take_turn(&mut board2, &mut rng1)?;
        shots1 += 1;
        if board2.is_won() {
            break "player1";
        }
        take_turn(&mut board1, &mut rng2)?;
        shots2 += 1;
        if board1.is_won() {
            break "player2";
        }
    };

    let report = SimReport {
        player1: SideReport {
            shots: shots1,
            ships_afloat: board1.ships_remaining(),
        },
        player2: SideReport {
            shots: shots2,
            ships_afloat: board2.ships_remaining(),
        },
        winner,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
