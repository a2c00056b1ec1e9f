//! Match controller: two players, two boards, alternating turns.

use std::collections::HashSet;

use anyhow::Context;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{InputError, ShotResult};
use crate::coord::Coord;
use crate::player::Player;

/// State of a match. Terminal states are never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    PlayerOneWon,
    PlayerTwoWon,
}

/// A running match. Owns both boards; each player only ever reaches the
/// opponent board through [`Board::shoot`].
pub struct Match {
    players: [Box<dyn Player>; 2],
    boards: [Board; 2],
    /// Coordinates each player has personally fired. The boards stay the
    /// authoritative repeat filter; this is the player's own intent
    /// record, checked first so a known repeat never reaches the board.
    fired: [HashSet<Coord>; 2],
    active: usize,
    status: MatchStatus,
    rng: SmallRng,
}

impl Match {
    pub fn new(
        player_one: Box<dyn Player>,
        board_one: Board,
        player_two: Box<dyn Player>,
        board_two: Board,
        rng: SmallRng,
    ) -> Self {
        Match {
            players: [player_one, player_two],
            boards: [board_one, board_two],
            fired: [HashSet::new(), HashSet::new()],
            active: 0,
            status: MatchStatus::InProgress,
            rng,
        }
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Index (0 or 1) of the player who moves next.
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn board(&self, index: usize) -> &Board {
        &self.boards[index]
    }

    /// Run one full turn of the active player: shots until the first miss,
    /// or until the opponent fleet is destroyed. Invalid and repeated
    /// targets are retried within the turn; a hit earns another shot.
    pub fn step(&mut self) -> anyhow::Result<MatchStatus> {
        if self.status != MatchStatus::InProgress {
            return Ok(self.status);
        }
        let attacker = self.active;
        let defender = 1 - attacker;
        self.players[attacker].observe(&self.boards[attacker], &self.boards[defender]);
        loop {
            let target = match self.players[attacker].choose_target(&mut self.rng) {
                Ok(target) => target,
                Err(InputError::Malformed) => {
                    log::debug!("player {}: malformed target, retrying", attacker + 1);
                    continue;
                }
                Err(err) => {
                    return Err(anyhow::anyhow!(err)).context("player input failed");
                }
            };
            if self.fired[attacker].contains(&target) {
                self.players[attacker].handle_shot_result(target, ShotResult::Repeated);
                continue;
            }
            let result = self.boards[defender].shoot(target);
            log::debug!("player {} shot {} -> {:?}", attacker + 1, target, result);
            self.players[attacker].handle_shot_result(target, result);
            match result {
                ShotResult::OutOfBounds | ShotResult::Repeated => continue,
                ShotResult::Miss => {
                    self.fired[attacker].insert(target);
                    self.active = defender;
                    break;
                }
                ShotResult::Hit | ShotResult::Sunk => {
                    self.fired[attacker].insert(target);
                    if self.boards[defender].is_defeated() {
                        self.status = if attacker == 0 {
                            MatchStatus::PlayerOneWon
                        } else {
                            MatchStatus::PlayerTwoWon
                        };
                        log::info!("player {} wins", attacker + 1);
                        break;
                    }
                    // extra shot on hit
                }
            }
        }
        Ok(self.status)
    }

    /// Drive the match to its terminal state.
    pub fn run(&mut self) -> anyhow::Result<MatchStatus> {
        while self.step()? == MatchStatus::InProgress {}
        Ok(self.status)
    }
}
