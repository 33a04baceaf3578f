//! Binary save format.
//!
//! A board record is a little-endian `i32` ship count, the `i64` hit mask,
//! then one `i64` mask per ship in placement order. A saved game is the
//! player's record followed by the computer's. Every field goes through
//! `bincode`, whose default encoding writes fixed-width little-endian
//! integers with no framing.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::board::{Board, Mask};
use crate::common::BoardError;
use crate::config::BOARD_SIZE;

/// Most ships a valid record can hold: each needs its own cell.
pub const MAX_RECORD_SHIPS: i32 = (BOARD_SIZE * BOARD_SIZE) as i32;

/// Reasons a record could not be written or read back.
#[derive(Debug)]
pub enum RecordError {
    /// The stream ended before the record did.
    Truncated,
    /// The ship count field is negative.
    NegativeShipCount(i32),
    /// The ship count exceeds what fits on one board.
    TooManyShips(i32),
    /// The ship masks do not form a valid fleet.
    InvalidFleet(BoardError),
    /// Bytes were left over after both boards of a game.
    TrailingData,
    /// The underlying reader or writer failed.
    Io(io::Error),
    /// Any other encoding failure.
    Encoding(String),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Truncated => write!(f, "Board record ends early"),
            RecordError::NegativeShipCount(n) => write!(f, "Negative ship count {}", n),
            RecordError::TooManyShips(n) => {
                write!(f, "Ship count {} exceeds {}", n, MAX_RECORD_SHIPS)
            }
            RecordError::InvalidFleet(e) => write!(f, "Invalid fleet in record: {}", e),
            RecordError::TrailingData => write!(f, "Unexpected data after saved game"),
            RecordError::Io(e) => write!(f, "I/O error: {}", e),
            RecordError::Encoding(msg) => write!(f, "Encoding error: {}", msg),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::InvalidFleet(e) => Some(e),
            RecordError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RecordError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            RecordError::Truncated
        } else {
            RecordError::Io(err)
        }
    }
}

impl From<bincode::Error> for RecordError {
    fn from(err: bincode::Error) -> Self {
        match *err {
            bincode::ErrorKind::Io(e) => RecordError::from(e),
            other => RecordError::Encoding(other.to_string()),
        }
    }
}

impl From<BoardError> for RecordError {
    fn from(err: BoardError) -> Self {
        RecordError::InvalidFleet(err)
    }
}

/// Write one board record.
pub fn write_board<W: Write>(writer: &mut W, board: &Board) -> Result<(), RecordError> {
    let count = i32::try_from(board.ships().len())
        .map_err(|_| RecordError::Encoding("too many ships".into()))?;
    bincode::serialize_into(&mut *writer, &count)?;
    bincode::serialize_into(&mut *writer, &(board.hits().into_raw() as i64))?;
    for ship in board.ships() {
        bincode::serialize_into(&mut *writer, &(ship.into_raw() as i64))?;
    }
    Ok(())
}

/// Read one board record, with caches already computed.
///
/// Nothing is returned unless the whole record was read and its ships form a
/// valid fleet.
pub fn read_board<R: Read>(reader: &mut R) -> Result<Board, RecordError> {
    let count: i32 = bincode::deserialize_from(&mut *reader)?;
    if count < 0 {
        return Err(RecordError::NegativeShipCount(count));
    }
    if count > MAX_RECORD_SHIPS {
        return Err(RecordError::TooManyShips(count));
    }
    let hits: i64 = bincode::deserialize_from(&mut *reader)?;
    let mut ships = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let ship: i64 = bincode::deserialize_from(&mut *reader)?;
        ships.push(Mask::from_raw(ship as u64));
    }
    Ok(Board::from_parts(Mask::from_raw(hits as u64), ships)?)
}

/// Encode a board record into a fresh buffer.
pub fn board_to_bytes(board: &Board) -> Result<Vec<u8>, RecordError> {
    let mut buf = Vec::with_capacity(12 + 8 * board.ships().len());
    write_board(&mut buf, board)?;
    Ok(buf)
}

/// Write a whole game: the player's board, then the computer's.
pub fn write_game<W: Write>(writer: &mut W, player: &Board, computer: &Board) -> Result<(), RecordError> {
    write_board(writer, player)?;
    write_board(writer, computer)
}

/// Read a whole game as `(player, computer)`.
pub fn read_game<R: Read>(reader: &mut R) -> Result<(Board, Board), RecordError> {
    let player = read_board(reader)?;
    let computer = read_board(reader)?;
    Ok((player, computer))
}

/// Save a game to `path`, replacing any existing file.
pub fn save_game(path: &Path, player: &Board, computer: &Board) -> Result<(), RecordError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_game(&mut writer, player, computer)?;
    writer.flush()?;
    Ok(())
}

/// Load a game saved with [`save_game`]. The file must hold exactly two
/// records.
pub fn load_game(path: &Path) -> Result<(Board, Board), RecordError> {
    let mut reader = BufReader::new(File::open(path)?);
    let game = read_game(&mut reader)?;
    let mut rest = [0u8; 1];
    if reader.read(&mut rest)? != 0 {
        return Err(RecordError::TrailingData);
    }
    Ok(game)
}
