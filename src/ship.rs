//! Ship geometry and per-segment damage tracking.

use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Segments advance along `y` (columns).
    Horizontal,
    /// Segments advance along `x` (rows).
    Vertical,
}

/// A linear ship anchored at its bow, with hits tracked per segment.
///
/// The ship knows nothing about board bounds or neighbours; the board
/// validates geometry at placement time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    orientation: Orientation,
    bow: Coord,
    /// Bitmask over segment indices `0..length`. A segment can register
    /// at most one hit, so health never under-counts on repeat shots.
    hits: u32,
}

impl Ship {
    pub const fn new(length: usize, orientation: Orientation, bow: Coord) -> Self {
        Self {
            length,
            orientation,
            bow,
            hits: 0,
        }
    }

    /// Occupied cells in bow-to-stern order. Pure function of
    /// `(bow, orientation, length)`.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length as i32).map(move |i| match self.orientation {
            Orientation::Horizontal => Coord::new(self.bow.x, self.bow.y + i),
            Orientation::Vertical => Coord::new(self.bow.x + i, self.bow.y),
        })
    }

    pub fn contains(&self, target: Coord) -> bool {
        self.cells().any(|c| c == target)
    }

    /// Record a hit at `target`. Returns `true` and reduces health iff the
    /// segment exists and has not been hit before; otherwise no effect.
    pub fn register_hit(&mut self, target: Coord) -> bool {
        let pos = self.cells().position(|c| c == target);
        match pos {
            Some(i) if self.hits & (1 << i) == 0 => {
                self.hits |= 1 << i;
                true
            }
            _ => false,
        }
    }

    /// Segments still intact. Decreases monotonically; zero is terminal.
    pub fn remaining(&self) -> usize {
        self.length - self.hits.count_ones() as usize
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining() == 0
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }
}
