//! A fixed-size bitboard implementation using const generics.
//!
//! Boards are an `N×N` grid packed into an unsigned integer `T`, with the cell
//! at column `x` and row `y` stored at bit `x + y * N`. The type is `no_std`
//! friendly and `Copy`; every combining operator returns a new value and
//! leaves both operands untouched.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};
use rand::Rng;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Column or row index is out of bounds [0..N).
    IndexOutOfBounds { x: usize, y: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            BitBoardError::IndexOutOfBounds { x, y } => {
                write!(f, "IndexOutOfBounds: x={}, y={}", x, y)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// One of the four compass directions a line can extend in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row N-1.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column N-1.
    Right,
}

impl Direction {
    /// All directions in the order the targeting engine probes neighbours.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Step one cell from `(x, y)`, returning `None` when the step would leave
    /// an `n×n` grid.
    #[inline]
    pub fn step(self, x: usize, y: usize, n: usize) -> Option<(usize, usize)> {
        let (nx, ny) = match self {
            Direction::Up => (Some(x), y.checked_sub(1)),
            Direction::Down => (Some(x), y.checked_add(1)),
            Direction::Left => (x.checked_sub(1), Some(y)),
            Direction::Right => (x.checked_add(1), Some(y)),
        };
        match (nx, ny) {
            (Some(nx), Some(ny)) if nx < n && ny < n => Some((nx, ny)),
            _ => None,
        }
    }
}

/// A fixed-size N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`N * N`).
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    #[inline]
    fn bit(x: usize, y: usize) -> T {
        T::one() << (x + y * N)
    }

    /// Create a new empty bitboard (all bits cleared) without size check.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::BOARD_BITS > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// A board with exactly the cell `(x, y)` set.
    pub fn cell(x: usize, y: usize) -> Result<Self, BitBoardError> {
        Self::check_bounds(x, y)?;
        Ok(BitBoard {
            bits: Self::bit(x, y),
        })
    }

    /// A straight line starting at `(x, y)` and extending up to `length`
    /// further cells in `direction`.
    ///
    /// The line is cut short at the board edge rather than wrapping, and the
    /// start cell is always included, so `length == 0` gives a single cell.
    pub fn line(
        x: usize,
        y: usize,
        direction: Direction,
        length: usize,
    ) -> Result<Self, BitBoardError> {
        let mut board = Self::cell(x, y)?;
        let (mut cx, mut cy) = (x, y);
        for _ in 0..length {
            match direction.step(cx, cy, N) {
                Some((nx, ny)) => {
                    board.bits = board.bits | Self::bit(nx, ny);
                    cx = nx;
                    cy = ny;
                }
                None => break,
            }
        }
        Ok(board)
    }

    /// A board with one uniformly random cell set, along with its coordinates.
    pub fn random_cell<R: Rng + ?Sized>(rng: &mut R) -> (Self, usize, usize) {
        let x = rng.random_range(0..N);
        let y = rng.random_range(0..N);
        (
            BitBoard {
                bits: Self::bit(x, y),
            },
            x,
            y,
        )
    }

    /// Like [`BitBoard::random_cell`], but draws both coordinates from `next`,
    /// which must return a value in `[0, n)` when called with `n`.
    pub fn random_cell_with<F>(mut next: F) -> Result<(Self, usize, usize), BitBoardError>
    where
        F: FnMut(usize) -> usize,
    {
        let x = next(N);
        let y = next(N);
        Ok((Self::cell(x, y)?, x, y))
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns true if at least one bit is set.
    #[inline]
    pub fn any(&self) -> bool {
        !self.is_empty()
    }

    /// Returns true if the two boards share at least one cell.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// Gets the bit at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Result<bool, BitBoardError> {
        Self::check_bounds(x, y)?;
        Ok(!(self.bits & Self::bit(x, y)).is_zero())
    }

    /// Sets the bit at (x, y) to 1.
    pub fn set(&mut self, x: usize, y: usize) -> Result<(), BitBoardError> {
        Self::check_bounds(x, y)?;
        self.bits = self.bits | Self::bit(x, y);
        Ok(())
    }

    /// Clears the bit at (x, y) to 0.
    pub fn clear(&mut self, x: usize, y: usize) -> Result<(), BitBoardError> {
        Self::check_bounds(x, y)?;
        self.bits = self.bits & !Self::bit(x, y);
        Ok(())
    }

    /// Sets all board bits to `1`.
    #[inline]
    pub fn fill(&mut self) {
        self.bits = Self::mask();
    }

    #[inline]
    fn check_bounds(x: usize, y: usize) -> Result<(), BitBoardError> {
        if x >= N || y >= N {
            Err(BitBoardError::IndexOutOfBounds { x, y })
        } else {
            Ok(())
        }
    }

    /// Consumes the board and returns the raw integer.
    #[inline]
    pub fn into_raw(self) -> T {
        self.bits
    }

    /// Creates a bitboard from the raw integer, masking out upper bits.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        BitBoard {
            bits: raw & Self::mask(),
        }
    }

    /// Creates a bitboard from an iterator over `(x, y)` positions.
    pub fn from_cells<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (x, y) in iter {
            board.set(x, y)?;
        }
        Ok(board)
    }

    /// Iterator over the set cells, in bit order (row by row).
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<T, N> {
        SetBits {
            bits: self.bits,
            idx: 0,
        }
    }

    fn write_rows(&self, f: &mut fmt::Formatter<'_>, trailing_newline: bool) -> fmt::Result {
        for y in 0..N {
            for x in 0..N {
                let ch = if (self.bits & Self::bit(x, y)).is_zero() {
                    '□'
                } else {
                    '■'
                };
                write!(f, "{} ", ch)?;
            }
            if trailing_newline || y + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", any::type_name::<T>(), N)?;
        self.write_rows(f, true)
    }
}

impl<T, const N: usize> fmt::Display for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_rows(f, false)
    }
}

/// Iterator over the set cells of a bitboard, yielding `(x, y)`.
#[derive(Clone, Copy)]
pub struct SetBits<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for SetBits<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if !((self.bits >> idx) & T::one()).is_zero() {
                return Some((idx % N, idx / N));
            }
        }
        None
    }
}

macro_rules! impl_bit_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $sym:tt) => {
        impl<T, const N: usize> $op for BitBoard<T, N>
        where
            T: PrimInt + Unsigned + Zero,
        {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                BitBoard::from_raw(self.bits $sym rhs.bits)
            }
        }

        impl<T, const N: usize> $assign for BitBoard<T, N>
        where
            T: PrimInt + Unsigned + Zero,
        {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                self.bits = self.bits $sym rhs.bits;
            }
        }
    };
}

impl_bit_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bit_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bit_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

/// Bitwise NOT for inverting a bitboard (within board bounds).
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}

/// Convenience alias for the standard board.
pub mod aliases {
    use super::BitBoard;

    /// 8×8 board in `u64`.
    pub type BB8x8 = BitBoard<u64, 8>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stops_at_edges() {
        assert_eq!(Direction::Up.step(3, 0, 8), None);
        assert_eq!(Direction::Left.step(0, 5, 8), None);
        assert_eq!(Direction::Right.step(7, 5, 8), None);
        assert_eq!(Direction::Down.step(2, 7, 8), None);
        assert_eq!(Direction::Down.step(2, 6, 8), Some((2, 7)));
    }

    #[test]
    fn mask_covers_whole_word_for_u64() {
        let mut bb = aliases::BB8x8::new();
        bb.fill();
        assert_eq!(bb.into_raw(), u64::MAX);
        assert_eq!((!bb).count_ones(), 0);
    }
}
