//! The automated opponent.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::InputError;
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::player::Player;

/// Uniform-random opponent. Targets are drawn independently of prior
/// shots; collisions come back as `Repeated` from the board and the turn
/// loop simply retries, so no unshot-cell bookkeeping is needed.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn choose_target(&mut self, rng: &mut SmallRng) -> Result<Coord, InputError> {
        Ok(Coord::new(
            rng.random_range(0..BOARD_SIZE as i32),
            rng.random_range(0..BOARD_SIZE as i32),
        ))
    }
}
