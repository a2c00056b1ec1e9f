//! Common types: shot results, cell states and error enums.

use core::fmt;

use crate::bitboard::BitBoardError;

/// Outcome of submitting one shot to a board.
///
/// Invalid shots are ordinary results, not errors: the turn loop retries
/// them without consuming the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Target lies outside the board. No state changed.
    OutOfBounds,
    /// Target was already resolved earlier. No state changed.
    Repeated,
    /// Target hit open water.
    Miss,
    /// Target hit a ship segment that still floats.
    Hit,
    /// Target hit the last intact segment of a ship.
    Sunk,
}

/// Rendering state of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
}

/// Errors raised while setting up the fleet. Setup never silently corrects
/// a bad placement; the caller retries with a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A ship cell falls outside the board.
    OutOfBounds,
    /// A ship cell overlaps or touches (8-neighbourhood) an earlier ship.
    Adjacent,
    /// Random setup exhausted its attempt budget.
    Exhausted,
    /// Underlying mask error.
    BitBoardError(BitBoardError),
}

impl From<BitBoardError> for PlacementError {
    fn from(err: BitBoardError) -> Self {
        PlacementError::BitBoardError(err)
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "ship placement is out of bounds"),
            PlacementError::Adjacent => {
                write!(f, "ship placement overlaps or touches another ship")
            }
            PlacementError::Exhausted => write!(f, "unable to place the fleet"),
            PlacementError::BitBoardError(e) => write!(f, "bitboard error: {}", e),
        }
    }
}

/// Errors raised while asking a player for a target.
#[derive(Debug)]
pub enum InputError {
    /// The supplied value could not be parsed into two integers. The turn
    /// loop treats this like an out-of-bounds shot and retries.
    Malformed,
    /// The input source failed or closed; fatal to the match.
    Io(std::io::Error),
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::Io(err)
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Malformed => write!(f, "could not parse two coordinates"),
            InputError::Io(e) => write!(f, "input source failed: {}", e),
        }
    }
}
