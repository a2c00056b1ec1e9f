//! Grid coordinates.

use core::fmt;

/// A position on (or off) the board. Signed so that raw user input can be
/// represented before the board validates it; bounds checking belongs to
/// [`crate::Board`], not to the coordinate itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-based, matching the rendered board and the input format.
        write!(f, "{} {}", self.x + 1, self.y + 1)
    }
}
