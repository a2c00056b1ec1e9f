//! Fixed-size square bit masks.
//!
//! Cell-state layers of the board (occupancy, hits, misses, shot history)
//! are each an `N×N` grid packed into one unsigned integer `T`. A 6×6
//! board fits comfortably in a `u64`.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};

use num_traits::{PrimInt, Unsigned};

/// Errors returned by mask operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row or column index is outside `[0, N)`.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "index out of bounds: row={}, col={}", row, col)
            }
        }
    }
}

/// An `N×N` bit mask stored in the unsigned integer `T`.
///
/// Cell `(row, col)` maps to bit `row * N + col`. `T` must have at least
/// `N * N` bits; the aliases used by this crate instantiate sizes where
/// that holds.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    /// Empty mask, all cells cleared.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Build a mask from `(row, col)` cells.
    pub fn from_cells<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut mask = Self::new();
        for (r, c) in cells {
            mask.set(r, c)?;
        }
        Ok(mask)
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// True when no cell is set.
    pub fn is_empty(&self) -> bool {
        self.bits == T::zero()
    }

    /// Read the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        Self::check_bounds(row, col)?;
        Ok((self.bits >> (row * N + col)) & T::one() != T::zero())
    }

    /// Set the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        Self::check_bounds(row, col)?;
        self.bits = self.bits | (T::one() << (row * N + col));
        Ok(())
    }

    /// The Chebyshev-distance-1 closure of this mask: every set cell plus
    /// its 8-neighbourhood, clipped to the board. Implements the contour
    /// ("no touching") buffer around placed ships.
    pub fn dilate(&self) -> Self {
        let mut out = *self;
        for (r, c) in self.cells() {
            for dr in -1i32..=1 {
                for dc in -1i32..=1 {
                    let (rr, cc) = (r as i32 + dr, c as i32 + dc);
                    if (0..N as i32).contains(&rr) && (0..N as i32).contains(&cc) {
                        let _ = out.set(rr as usize, cc as usize);
                    }
                }
            }
        }
        out
    }

    /// Iterator over the set cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..N * N)
            .filter(move |idx| (self.bits >> *idx) & T::one() != T::zero())
            .map(|idx| (idx / N, idx % N))
    }

    #[inline]
    fn check_bounds(row: usize, col: usize) -> Result<(), BitBoardError> {
        if row >= N || col >= N {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let ch = if (self.bits >> (r * N + c)) & T::one() != T::zero() {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
