use std::path::{Path, PathBuf};

use anyhow::Context;
use rand::Rng;

use crate::{
    ai::{self, Shot},
    board::Board,
    common::{BoardError, ShotOutcome},
    config::GENERATION_RETRIES,
    fleet, record,
};

/// Current status of a game, from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// What happened during one round of [`Session::fire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Round {
    /// The target had been fired at before; nothing changed and the computer
    /// did not move.
    AlreadyFired,
    /// The player's shot sank the last computer ship.
    PlayerWon { outcome: ShotOutcome },
    /// Both sides fired and the game goes on.
    Played { outcome: ShotOutcome, reply: Shot },
    /// The computer's reply sank the last player ship.
    ComputerWon { outcome: ShotOutcome, reply: Shot },
}

/// One game in progress: both boards and the file it is saved to.
#[derive(Debug, Clone)]
pub struct Session {
    player: Board,
    computer: Board,
    path: PathBuf,
}

impl Session {
    /// Start a game against a computer fleet shaped like the player's, and
    /// save it to `path`.
    pub fn new_game<R: Rng + ?Sized>(
        path: impl Into<PathBuf>,
        player: Board,
        rng: &mut R,
    ) -> anyhow::Result<Self> {
        let computer = generate_opponent(&player, rng)?;
        let session = Self {
            player,
            computer,
            path: path.into(),
        };
        session.save()?;
        log::info!("new game saved to {}", session.path.display());
        Ok(session)
    }

    /// Resume the game saved at `path`.
    pub fn load(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let (player, computer) = record::load_game(&path)
            .with_context(|| format!("failed to load game from {}", path.display()))?;
        log::info!("loaded game from {}", path.display());
        Ok(Self {
            player,
            computer,
            path,
        })
    }

    /// Write both boards to the session's file.
    pub fn save(&self) -> anyhow::Result<()> {
        record::save_game(&self.path, &self.player, &self.computer)
            .with_context(|| format!("failed to save game to {}", self.path.display()))
    }

    /// The human player's board.
    pub fn player(&self) -> &Board {
        &self.player
    }

    /// The computer's board.
    pub fn computer(&self) -> &Board {
        &self.computer
    }

    /// File the game is saved to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.computer.is_won() {
            GameStatus::Won
        } else if self.player.is_won() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Play one round: the player fires at (`x`, `y`) on the computer board and,
    /// unless that ends the game, the computer answers. The game is saved
    /// after every round that changed it.
    pub fn fire<R: Rng + ?Sized>(&mut self, x: usize, y: usize, rng: &mut R) -> anyhow::Result<Round> {
        if self.status() != GameStatus::InProgress {
            anyhow::bail!("the game is already over");
        }
        if !self.computer.mark_hit(x, y)? {
            return Ok(Round::AlreadyFired);
        }
        let outcome = ShotOutcome::from_cell(self.computer.cell_state(x, y)?)
            .unwrap_or(ShotOutcome::Miss);
        log::debug!("player fired at ({}, {}): {:?}", x, y, outcome);

        let round = if self.computer.is_won() {
            Round::PlayerWon { outcome }
        } else {
            let reply = ai::take_turn(&mut self.player, rng)?;
            if self.player.is_won() {
                Round::ComputerWon { outcome, reply }
            } else {
                Round::Played { outcome, reply }
            }
        };
        self.save()?;
        Ok(round)
    }
}

/// Generate the computer's board, retrying with fresh randomness when a
/// generation runs out of attempts.
pub fn generate_opponent<R: Rng + ?Sized>(player: &Board, rng: &mut R) -> anyhow::Result<Board> {
    retry_generation(|| fleet::generate_like(player, rng))
}

fn retry_generation<F>(mut generate: F) -> anyhow::Result<Board>
where
    F: FnMut() -> Result<Board, BoardError>,
{
    for attempt in 1..=GENERATION_RETRIES {
        match generate() {
            Ok(board) => return Ok(board),
            Err(BoardError::FleetExhausted) => {
                log::warn!("fleet generation attempt {} exhausted, retrying", attempt);
            }
            Err(e) => return Err(anyhow::anyhow!(e)),
        }
    }
    Err(anyhow::anyhow!(BoardError::FleetExhausted))
}
