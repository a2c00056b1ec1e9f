use std::collections::VecDeque;
use std::io::{self, Cursor};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    AiPlayer, Board, Cell, CliPlayer, Coord, InputError, Match, MatchStatus, Orientation, Player,
    Ship,
};

/// Plays a fixed sequence of coordinates; running dry is an input failure
/// so a misconfigured test aborts instead of spinning.
struct ScriptedPlayer {
    moves: VecDeque<Coord>,
}

impl ScriptedPlayer {
    fn new(moves: &[Coord]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn choose_target(&mut self, _rng: &mut SmallRng) -> Result<Coord, InputError> {
        self.moves.pop_front().ok_or_else(|| {
            InputError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "script exhausted",
            ))
        })
    }
}

fn board_with(ships: &[Ship]) -> Board {
    let mut board = Board::new();
    for &ship in ships {
        board.place(ship).unwrap();
    }
    board
}

fn misses_on(board: &Board) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for (r, row) in board.snapshot().iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if *cell == Cell::Miss {
                out.push((r, c));
            }
        }
    }
    out
}

#[test]
fn test_hit_keeps_turn_miss_passes_it() {
    let b1 = board_with(&[Ship::new(1, Orientation::Horizontal, Coord::new(0, 0))]);
    let b2 = board_with(&[Ship::new(3, Orientation::Vertical, Coord::new(0, 0))]);
    // two hits, then a miss: all in one turn
    let p1 = ScriptedPlayer::new(&[Coord::new(0, 0), Coord::new(1, 0), Coord::new(5, 5)]);
    let p2 = ScriptedPlayer::new(&[]);
    let mut game = Match::new(
        Box::new(p1),
        b1,
        Box::new(p2),
        b2,
        SmallRng::seed_from_u64(0),
    );

    assert_eq!(game.active(), 0);
    assert_eq!(game.step().unwrap(), MatchStatus::InProgress);
    // the whole script was consumed by a single turn
    assert_eq!(game.active(), 1);
    assert_eq!(game.board(1).alive_ships(), 1);
    assert_eq!(misses_on(game.board(1)), vec![(5, 5)]);
}

#[test]
fn test_invalid_and_repeated_shots_consume_no_turn() {
    let b1 = board_with(&[Ship::new(1, Orientation::Horizontal, Coord::new(0, 0))]);
    let b2 = board_with(&[Ship::new(1, Orientation::Horizontal, Coord::new(0, 0))]);
    // p1: miss, then (after p2's turn) an own-history repeat and a fresh miss
    let p1 = ScriptedPlayer::new(&[
        Coord::new(9, 9), // out of bounds, retried
        Coord::new(5, 5), // miss, ends turn
        Coord::new(5, 5), // repeat of own shot, retried
        Coord::new(4, 4), // miss, ends turn
    ]);
    let p2 = ScriptedPlayer::new(&[Coord::new(5, 5)]);
    let mut game = Match::new(
        Box::new(p1),
        b1,
        Box::new(p2),
        b2,
        SmallRng::seed_from_u64(0),
    );

    assert_eq!(game.step().unwrap(), MatchStatus::InProgress);
    assert_eq!(game.active(), 1);
    // the out-of-bounds attempt left exactly one miss
    assert_eq!(misses_on(game.board(1)), vec![(5, 5)]);

    assert_eq!(game.step().unwrap(), MatchStatus::InProgress);
    assert_eq!(game.active(), 0);

    assert_eq!(game.step().unwrap(), MatchStatus::InProgress);
    assert_eq!(game.active(), 1);
    assert_eq!(misses_on(game.board(1)), vec![(4, 4), (5, 5)]);
}

#[test]
fn test_victory_ends_match_within_turn() {
    let b1 = board_with(&[Ship::new(2, Orientation::Horizontal, Coord::new(0, 0))]);
    let b2 = board_with(&[Ship::new(2, Orientation::Horizontal, Coord::new(0, 0))]);
    let p1 = ScriptedPlayer::new(&[Coord::new(0, 0), Coord::new(0, 1)]);
    let p2 = ScriptedPlayer::new(&[]);
    let mut game = Match::new(
        Box::new(p1),
        b1,
        Box::new(p2),
        b2,
        SmallRng::seed_from_u64(0),
    );

    // pure hits: the match ends on the first turn, well inside the
    // 2 x length bound
    assert_eq!(game.step().unwrap(), MatchStatus::PlayerOneWon);
    assert!(game.board(1).is_defeated());
    assert!(!game.board(0).is_defeated());

    // terminal state is sticky and needs no further player input
    assert_eq!(game.step().unwrap(), MatchStatus::PlayerOneWon);
    assert_eq!(game.status(), MatchStatus::PlayerOneWon);
}

#[test]
fn test_script_exhaustion_is_fatal() {
    let b1 = board_with(&[Ship::new(1, Orientation::Horizontal, Coord::new(0, 0))]);
    let b2 = board_with(&[Ship::new(1, Orientation::Horizontal, Coord::new(0, 0))]);
    let p1 = ScriptedPlayer::new(&[]);
    let p2 = ScriptedPlayer::new(&[]);
    let mut game = Match::new(
        Box::new(p1),
        b1,
        Box::new(p2),
        b2,
        SmallRng::seed_from_u64(0),
    );
    assert!(game.step().is_err());
}

#[test]
fn test_cli_player_retries_bad_input() {
    let b1 = board_with(&[Ship::new(1, Orientation::Horizontal, Coord::new(0, 0))]);
    let b2 = board_with(&[Ship::new(1, Orientation::Horizontal, Coord::new(0, 0))]);
    // malformed line, then off-board, then the killing shot (1-based input)
    let p1 = CliPlayer::new(Cursor::new(&b"junk\n9 9\n1 1\n"[..]));
    let p2 = ScriptedPlayer::new(&[]);
    let mut game = Match::new(
        Box::new(p1),
        b1,
        Box::new(p2),
        b2,
        SmallRng::seed_from_u64(0),
    );
    assert_eq!(game.step().unwrap(), MatchStatus::PlayerOneWon);
}

#[test]
fn test_ai_vs_ai_terminates() {
    let mut rng = SmallRng::seed_from_u64(123);
    let b1 = Board::with_random_fleet(&mut rng).unwrap();
    let b2 = Board::with_random_fleet(&mut rng).unwrap();
    let mut game = Match::new(
        Box::new(AiPlayer::new()),
        b1,
        Box::new(AiPlayer::new()),
        b2,
        rng,
    );

    // every turn resolves at least one fresh coordinate, so the step count
    // is bounded by the two boards' cell counts
    let mut steps = 0;
    while game.step().unwrap() == MatchStatus::InProgress {
        steps += 1;
        assert!(steps <= 72, "match failed to terminate");
    }
    match game.status() {
        MatchStatus::PlayerOneWon => assert!(game.board(1).is_defeated()),
        MatchStatus::PlayerTwoWon => assert!(game.board(0).is_defeated()),
        MatchStatus::InProgress => unreachable!(),
    }
}
