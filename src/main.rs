use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use battleboats::{
    cli, generate_fleet, init_logging, standard_fleet_sizes, DisplaySettings, GameStatus,
    Session, SAVE_DIR,
};
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Naval combat against the computer on an 8x8 board", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct GameArgs {
    /// Name of the saved game.
    name: String,
    #[arg(long, default_value = SAVE_DIR, help = "Directory holding saved games")]
    dir: PathBuf,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Show both boards next to each other")]
    side_by_side: bool,
    #[arg(long, help = "Draw grid lines around cells")]
    grid: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new game.
    New {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, help = "Place the standard fleet at random instead of asking")]
        auto: bool,
        #[arg(long, help = "Replace an existing save with the same name")]
        overwrite: bool,
    },
    /// Resume a saved game.
    Continue {
        #[command(flatten)]
        game: GameArgs,
    },
}

impl GameArgs {
    fn save_path(&self) -> PathBuf {
        self.dir.join(format!("{}.bin", self.name))
    }

    fn settings(&self) -> DisplaySettings {
        DisplaySettings {
            side_by_side: self.side_by_side,
            grid_lines: self.grid,
        }
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            }
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let (mut session, game, mut rng) = match args.command {
        Commands::New {
            game,
            auto,
            overwrite,
        } => {
            let path = game.save_path();
            if path.exists() && !overwrite {
                anyhow::bail!(
                    "a game named '{}' already exists; use `continue` to resume it or --overwrite to replace it",
                    game.name
                );
            }
            ensure_dir(&game.dir)?;
            let mut rng = game.rng();
            let player = if auto {
                generate_fleet(&standard_fleet_sizes(), &mut rng)?
            } else {
                cli::place_fleet(&mut input, &mut out, game.settings())?
            };
            let session = Session::new_game(path, player, &mut rng)?;
            (session, game, rng)
        }
        Commands::Continue { game } => {
            let path = game.save_path();
            if !path.exists() {
                anyhow::bail!("no saved game named '{}' in {}", game.name, game.dir.display());
            }
            let rng = game.rng();
            (Session::load(path)?, game, rng)
        }
    };

    match cli::play(&mut session, &mut rng, &mut input, &mut out, game.settings())? {
        GameStatus::Won => println!("Victory!"),
        GameStatus::Lost => println!("Defeat."),
        GameStatus::InProgress => {}
    }
    Ok(())
}
