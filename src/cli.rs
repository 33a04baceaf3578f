#![cfg(feature = "std")]

//! Line-oriented text front end: ship placement and the turn loop.
//!
//! Input and output are passed in, so the same code runs on a terminal and
//! under test with in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::Context;
use rand::Rng;

use crate::{
    board::{Board, Mask},
    config::{BOARD_SIZE, FLEET_SIZE, SHIPS},
    game::{GameStatus, Round, Session},
    ship::ship_between,
    ui::{render_board, render_boards, DisplaySettings},
};

/// Format a cell as column letter and row number, e.g. `(2, 3)` → `C4`.
pub fn coord_to_string(x: usize, y: usize) -> String {
    let col = (b'A' + x as u8) as char;
    format!("{}{}", col, y + 1)
}

/// Parse a cell written as column letter and row number, e.g. `C4`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., C4)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-H", col_ch));
    }
    let x = (col_ch as u8 - b'A') as usize;
    if x >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-H", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-8", row_str))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-8", row));
    }
    Ok((x, row - 1))
}

/// Parse a ship given by its two end cells, e.g. `A1 A5` or `B2-E2`. A single
/// cell is a one-cell ship.
pub fn parse_ship(input: &str) -> Result<Mask, String> {
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|p| !p.is_empty());
    let start = parse_coord(parts.next().ok_or("Empty input")?)?;
    let end = match parts.next() {
        Some(p) => parse_coord(p)?,
        None => start,
    };
    if parts.next().is_some() {
        return Err("Give at most two cells".to_string());
    }
    ship_between(start, end).map_err(|e| e.to_string())
}

fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line).context("failed to read input")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for [`FLEET_SIZE`] ships, one line per ship, and return the board.
///
/// Each prompt names the standard ship for that slot, but straight ships of
/// any length are accepted; overlapping or diagonal ones are rejected and
/// asked for again.
pub fn place_fleet<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    settings: DisplaySettings,
) -> anyhow::Result<Board> {
    let mut board = Board::new();
    writeln!(out, "Place your ships by naming both ends (e.g. A1 A5).")?;
    for (i, kind) in SHIPS.iter().enumerate() {
        loop {
            write!(out, "{}", render_board(&board, true, settings))?;
            write!(
                out,
                "Ship {} of {} ({}, {} cells): ",
                i + 1,
                FLEET_SIZE,
                kind.name(),
                kind.length()
            )?;
            out.flush()?;
            let line = read_line(input)?
                .ok_or_else(|| anyhow::anyhow!("input closed during ship placement"))?;
            let ship = match parse_ship(&line) {
                Ok(ship) => ship,
                Err(msg) => {
                    writeln!(out, "Invalid ship: {}", msg)?;
                    continue;
                }
            };
            match board.add_ship(ship) {
                Ok(()) => break,
                Err(e) => writeln!(out, "Error: {}", e)?,
            }
        }
    }
    Ok(board)
}

/// Run the turn loop until the game ends or the player quits (`q` or end of
/// input). The session is saved after every round, so quitting keeps the
/// game resumable.
pub fn play<R, W, G>(
    session: &mut Session,
    rng: &mut G,
    input: &mut R,
    out: &mut W,
    settings: DisplaySettings,
) -> anyhow::Result<GameStatus>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    while session.status() == GameStatus::InProgress {
        write!(out, "{}", render_boards(session.player(), session.computer(), settings))?;
        writeln!(
            out,
            "Your ships afloat: {} | Enemy ships afloat: {}",
            session.player().ships_remaining(),
            session.computer().ships_remaining()
        )?;
        write!(out, "Fire at (e.g. C4, q to quit): ")?;
        out.flush()?;

        let line = match read_line(input)? {
            Some(line) if !line.eq_ignore_ascii_case("q") => line,
            _ => {
                writeln!(out, "Game saved to {}", session.path().display())?;
                return Ok(session.status());
            }
        };
        let (x, y) = match parse_coord(&line) {
            Ok(cell) => cell,
            Err(msg) => {
                writeln!(out, "Invalid target: {}", msg)?;
                continue;
            }
        };
        let target = coord_to_string(x, y);
        match session.fire(x, y, rng)? {
            Round::AlreadyFired => writeln!(out, "You have already fired at {}.", target)?,
            Round::Played { outcome, reply } => {
                writeln!(out, "You fired at {}. {}", target, outcome)?;
                writeln!(out, "{}", reply)?;
            }
            Round::PlayerWon { outcome } => {
                writeln!(out, "You fired at {}. {}", target, outcome)?;
                writeln!(out, "You sank the whole fleet. You win!")?;
            }
            Round::ComputerWon { outcome, reply } => {
                writeln!(out, "You fired at {}. {}", target, outcome)?;
                writeln!(out, "{}", reply)?;
                writeln!(out, "The computer sank your fleet. You lose.")?;
            }
        }
    }
    write!(out, "{}", render_boards(session.player(), session.computer(), settings))?;
    Ok(session.status())
}
