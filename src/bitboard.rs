//! A fixed-size bitboard implementation using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. Boards are
//! represented as a `ROWS×COLS` grid packed row-major into an unsigned
//! integer `T`, so cell `(row, col)` lives at bit `row * COLS + col`.

use core::ops::{BitAnd, BitOr, Not};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size ROWS*COLS exceeds capacity of `T::BITS`.
    SizeTooLarge { cells: usize, capacity: usize },
    /// Row or column index is out of bounds.
    IndexOutOfBounds { row: usize, col: usize },
}

impl core::fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { cells, capacity } => {
                write!(f, "SizeTooLarge: {} cells exceed T::BITS={}", cells, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// A fixed-size `ROWS×COLS` bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const ROWS: usize, const COLS: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const ROWS: usize, const COLS: usize> BitBoard<T, ROWS, COLS>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`ROWS * COLS`).
    pub const CELLS: usize = ROWS * COLS;

    #[inline]
    fn mask() -> T {
        if Self::CELLS >= mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Create a new empty bitboard (all bits cleared) without size check.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if ROWS*COLS > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::CELLS > capacity {
            Err(BitBoardError::SizeTooLarge {
                cells: Self::CELLS,
                capacity,
            })
        } else {
            Ok(BitBoard { bits: T::zero() })
        }
    }

    /// Returns the number of set bits (occupied cells).
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        self.check_bounds(row, col)?;
        Ok(self.get_index(row * COLS + col))
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.check_bounds(row, col)?;
        self.set_index(row * COLS + col);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.check_bounds(row, col)?;
        let idx = row * COLS + col;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Reads the bit at a raw cell index. Indices past the board read as 0.
    #[inline]
    pub fn get_index(&self, idx: usize) -> bool {
        idx < Self::CELLS && ((self.bits >> idx) & T::one()) != T::zero()
    }

    /// Sets the bit at a raw cell index. Indices past the board are ignored.
    #[inline]
    pub fn set_index(&mut self, idx: usize) {
        if idx < Self::CELLS {
            self.bits = self.bits | (T::one() << idx);
        }
    }

    /// Clears all bits to `0`.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BitBoardError> {
        if row >= ROWS || col >= COLS {
            Err(BitBoardError::IndexOutOfBounds { row, col })
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

    /// Shifts every bit `n` cells towards index 0. Bits shifted below index 0
    /// are dropped; vacated high cells are filled with zeros.
    #[inline]
    pub fn shr(self, n: usize) -> Self {
        if n >= mem::size_of::<T>() * 8 {
            Self::new()
        } else {
            BitBoard {
                bits: self.bits >> n,
            }
        }
    }

    /// Creates a bitboard from an iterator over `(row, col)` positions.
    #[inline]
    pub fn from_iter<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (r, c) in iter {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// Iterator over the set bits of the board, in index order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T, ROWS, COLS> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T, const ROWS: usize, const COLS: usize> Default for BitBoard<T, ROWS, COLS>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const ROWS: usize, const COLS: usize> fmt::Debug for BitBoard<T, ROWS, COLS>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}, {}>:", any::type_name::<T>(), ROWS, COLS)?;
        for r in (0..ROWS).rev() {
            for c in 0..COLS {
                let bit = if self.get_index(r * COLS + c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard, yielding `(row, col)`.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const ROWS: usize, const COLS: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, ROWS, COLS>,
    idx: usize,
}

impl<'a, T, const ROWS: usize, const COLS: usize> Iterator for SetBits<'a, T, ROWS, COLS>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < ROWS * COLS {
            let idx = self.idx;
            self.idx += 1;
            if self.board.get_index(idx) {
                return Some((idx / COLS, idx % COLS));
            }
        }
        None
    }
}

/// Bitwise AND for combining two bitboards.
impl<T, const ROWS: usize, const COLS: usize> BitAnd for BitBoard<T, ROWS, COLS>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.into_raw() & rhs.into_raw())
    }
}

/// Bitwise OR for combining two bitboards.
impl<T, const ROWS: usize, const COLS: usize> BitOr for BitBoard<T, ROWS, COLS>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.into_raw() | rhs.into_raw())
    }
}

/// Bitwise NOT for inverting a bitboard (within board bounds).
impl<T, const ROWS: usize, const COLS: usize> Not for BitBoard<T, ROWS, COLS>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}
