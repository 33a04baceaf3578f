#![cfg(feature = "std")]

//! Text rendering of boards.

use std::fmt::Write;

use crate::board::{Board, CellState};
use crate::config::BOARD_SIZE;

/// How boards are laid out on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Draw the player's and the computer's boards next to each other.
    pub side_by_side: bool,
    /// Surround every cell with grid lines.
    pub grid_lines: bool,
}

/// Character shown for a cell. Un-hit ships are only drawn when `reveal` is
/// set, i.e. on the owner's own board.
pub fn cell_char(state: CellState, reveal: bool) -> char {
    match state {
        CellState::None => '.',
        CellState::Miss => '#',
        CellState::Hit => '!',
        CellState::HitSunk => '~',
        CellState::Unhit if reveal => '@',
        CellState::Unhit => '.',
    }
}

fn column_labels(grid_lines: bool) -> String {
    let letters = (0..BOARD_SIZE).map(|c| (b'A' + c as u8) as char);
    if grid_lines {
        letters.fold(String::from("|"), |mut acc, ch| {
            acc.push(ch);
            acc.push('|');
            acc
        })
    } else {
        letters.collect()
    }
}

fn border() -> String {
    "+-".repeat(BOARD_SIZE + 1) + "+"
}

fn header(settings: DisplaySettings, boards: usize) -> String {
    let mut out = String::new();
    if settings.grid_lines {
        let top = format!("  {}", &border()[2..]);
        let labels = format!("  {}", column_labels(true));
        let sep = border();
        let join = |part: &str, gap: &str| vec![part; boards].join(gap);
        let _ = writeln!(out, "{}", join(top.as_str(), "   "));
        let _ = writeln!(out, "{}", join(labels.as_str(), "   "));
        let _ = writeln!(out, "{}", join(sep.as_str(), " "));
    } else {
        let labels = format!(" {}", column_labels(false));
        let _ = writeln!(out, "{}", vec![labels.as_str(); boards].join(" "));
    }
    out
}

fn render_row(board: &Board, y: usize, reveal: bool, grid_lines: bool) -> String {
    let cells = board.grid()[y].map(|s| cell_char(s, reveal));
    let mut out = String::new();
    if grid_lines {
        let _ = write!(out, "|{}|", y + 1);
        for ch in cells {
            out.push(ch);
            out.push('|');
        }
    } else {
        let _ = write!(out, "{}", y + 1);
        out.extend(cells);
    }
    out
}

/// Render one board. `reveal` shows un-hit ships.
pub fn render_board(board: &Board, reveal: bool, settings: DisplaySettings) -> String {
    let mut out = header(settings, 1);
    for y in 0..BOARD_SIZE {
        let _ = writeln!(out, "{}", render_row(board, y, reveal, settings.grid_lines));
        if settings.grid_lines {
            let _ = writeln!(out, "{}", border());
        }
    }
    out
}

/// Render the player's own board (ships revealed) and the computer's board
/// (ships hidden), side by side or stacked according to `settings`.
pub fn render_boards(own: &Board, enemy: &Board, settings: DisplaySettings) -> String {
    if !settings.side_by_side {
        return render_board(own, true, settings) + &render_board(enemy, false, settings);
    }
    let mut out = header(settings, 2);
    for y in 0..BOARD_SIZE {
        let _ = writeln!(
            out,
            "{} {}",
            render_row(own, y, true, settings.grid_lines),
            render_row(enemy, y, false, settings.grid_lines)
        );
        if settings.grid_lines {
            let _ = writeln!(out, "{} {}", border(), border());
        }
    }
    out
}
