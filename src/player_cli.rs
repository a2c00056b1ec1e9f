//! Terminal-driven player and board rendering.

use std::io::{self, BufRead, BufReader, Write};

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{Cell, InputError, ShotResult};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::player::Player;

/// Human player reading `"row col"` pairs (1-based) from a line source.
///
/// Generic over the reader so tests can feed it a cursor instead of stdin.
pub struct CliPlayer<R: BufRead> {
    input: R,
}

impl CliPlayer<BufReader<io::Stdin>> {
    /// Player wired to standard input.
    pub fn stdin() -> Self {
        CliPlayer {
            input: BufReader::new(io::stdin()),
        }
    }
}

impl<R: BufRead> CliPlayer<R> {
    pub fn new(input: R) -> Self {
        CliPlayer { input }
    }
}

/// Parse a 1-based `"row col"` pair into a 0-based coordinate.
fn parse_coord(line: &str) -> Option<Coord> {
    let mut parts = line.split_whitespace();
    let x: i32 = parts.next()?.parse().ok()?;
    let y: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coord::new(x - 1, y - 1))
}

/// Print a board to stdout. With `reveal` false, intact ship cells render
/// as open water, which is how the opponent board is shown.
pub fn print_board(board: &Board, reveal: bool) {
    let grid = board.snapshot();
    print!("  ");
    for c in 0..BOARD_SIZE {
        print!(" {}", c + 1);
    }
    println!();
    for (r, row) in grid.iter().enumerate() {
        print!("{:2}", r + 1);
        for cell in row {
            let ch = match cell {
                Cell::Hit => 'X',
                Cell::Miss => 'o',
                Cell::Ship if reveal => '#',
                _ => '.',
            };
            print!(" {}", ch);
        }
        println!();
    }
}

impl<R: BufRead> Player for CliPlayer<R> {
    fn choose_target(&mut self, _rng: &mut SmallRng) -> Result<Coord, InputError> {
        print!("Your shot (row col): ");
        io::stdout().flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        parse_coord(line.trim()).ok_or_else(|| {
            println!("Enter two numbers separated by a space, e.g. '1 2'.");
            InputError::Malformed
        })
    }

    fn observe(&mut self, own: &Board, enemy: &Board) {
        println!("\nYour board:");
        print_board(own, true);
        println!("Opponent board ({} ships afloat):", enemy.alive_ships());
        print_board(enemy, false);
    }

    fn handle_shot_result(&mut self, target: Coord, result: ShotResult) {
        match result {
            ShotResult::OutOfBounds => println!("{} is off the board, try again.", target),
            ShotResult::Repeated => println!("You already shot at {}, try again.", target),
            ShotResult::Miss => println!("{}: miss.", target),
            ShotResult::Hit => println!("{}: hit! Shoot again.", target),
            ShotResult::Sunk => println!("{}: hit and sunk! Shoot again.", target),
        }
    }
}
