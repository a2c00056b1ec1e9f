//! Fixed game configuration. Board size and fleet composition are
//! compile-time constants, not parsed input.

/// Side length of the square board.
pub const BOARD_SIZE: usize = 6;

/// Ship lengths of the classic 6×6 fleet, placed in this order. Placing
/// the longest first keeps random setup from wedging itself.
pub const FLEET_LENGTHS: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Random placement attempts per ship before the board layout is
/// considered wedged and restarted from scratch.
pub const PLACEMENT_ATTEMPTS: usize = 1000;

/// Whole-board restarts before fleet setup gives up entirely.
pub const BOARD_ATTEMPTS: usize = 100;
