//! Player abstraction: anything that can pick targets and be told what
//! happened.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{InputError, ShotResult};
use crate::coord::Coord;

/// Interface implemented by the different combatant kinds.
///
/// A player never touches a board directly; it only proposes coordinates
/// and receives results. The match controller owns the boards and routes
/// every shot through [`Board::shoot`].
pub trait Player {
    /// Choose the next target. May return [`InputError::Malformed`] for
    /// input that failed to parse; the turn loop retries it like an
    /// out-of-bounds shot.
    fn choose_target(&mut self, rng: &mut SmallRng) -> Result<Coord, InputError>;

    /// Called at the start of each of this player's turns with its own
    /// board and the opponent board, for presentation only.
    fn observe(&mut self, _own: &Board, _enemy: &Board) {}

    /// Called with the outcome of each shot this player fired.
    fn handle_shot_result(&mut self, _target: Coord, _result: ShotResult) {}
}
