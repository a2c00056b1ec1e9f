//! A small sea-battle engine: ship placement with a no-touching contour
//! rule, shot resolution, and a turn-alternating match loop on a fixed
//! 6×6 board.

mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod game;
mod logging;
mod player;
mod player_ai;
mod player_cli;
mod ship;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::Board;
pub use common::{Cell, InputError, PlacementError, ShotResult};
pub use config::{BOARD_SIZE, FLEET_LENGTHS};
pub use coord::Coord;
pub use game::{Match, MatchStatus};
pub use logging::init_logging;
pub use player::Player;
pub use player_ai::AiPlayer;
pub use player_cli::{print_board, CliPlayer};
pub use ship::{Orientation, Ship};
