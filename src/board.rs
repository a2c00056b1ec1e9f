//! Board state: placed ships, shot history and shot resolution.

use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{Cell, PlacementError, ShotResult};
use crate::config::{BOARD_ATTEMPTS, BOARD_SIZE, FLEET_LENGTHS, PLACEMENT_ATTEMPTS};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

/// Mask type backing every cell-state layer of the board.
type BB = BitBoard<u64, BOARD_SIZE>;

/// One player's board: fleet, occupancy and the authoritative record of
/// every shot ever resolved on it.
///
/// All mutation goes through [`Board::place`] and [`Board::shoot`]; the
/// raw cell state is only ever read out via [`Board::snapshot`].
#[derive(Debug, Clone)]
pub struct Board {
    ships: Vec<Ship>,
    ship_map: BB,
    hits: BB,
    misses: BB,
    shots: BB,
    alive: usize,
}

impl Board {
    /// Empty board, no ships placed.
    pub fn new() -> Self {
        Board {
            ships: Vec::new(),
            ship_map: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
            shots: BB::new(),
            alive: 0,
        }
    }

    /// Board with the configured fleet placed at random. Restarts from an
    /// empty board whenever a layout wedges; fails only once the restart
    /// budget is spent.
    pub fn with_random_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, PlacementError> {
        for _ in 0..BOARD_ATTEMPTS {
            if let Ok(board) = Self::try_random_fleet(rng) {
                return Ok(board);
            }
        }
        Err(PlacementError::Exhausted)
    }

    fn try_random_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, PlacementError> {
        let mut board = Self::new();
        'ships: for &length in FLEET_LENGTHS.iter() {
            for _ in 0..PLACEMENT_ATTEMPTS {
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let bow = Coord::new(
                    rng.random_range(0..BOARD_SIZE as i32),
                    rng.random_range(0..BOARD_SIZE as i32),
                );
                if board.place(Ship::new(length, orientation, bow)).is_ok() {
                    continue 'ships;
                }
            }
            return Err(PlacementError::Exhausted);
        }
        Ok(board)
    }

    /// Place a ship, enforcing bounds and the contour rule.
    ///
    /// The new ship may not overlap or touch (Chebyshev distance 1) any
    /// *previously placed* ship; validation is against placement order
    /// only and is never re-run later. Failure leaves the board unchanged.
    pub fn place(&mut self, ship: Ship) -> Result<(), PlacementError> {
        if ship.cells().any(|c| !self.in_bounds(c)) {
            return Err(PlacementError::OutOfBounds);
        }
        let mask = BB::from_cells(ship.cells().map(|c| (c.x as usize, c.y as usize)))?;
        if !(self.ship_map.dilate() & mask).is_empty() {
            return Err(PlacementError::Adjacent);
        }
        log::debug!(
            "placed ship: length={} orientation={:?} bow={}",
            ship.length(),
            ship.orientation(),
            ship.bow()
        );
        self.ship_map |= mask;
        self.ships.push(ship);
        self.alive += 1;
        Ok(())
    }

    /// Resolve a shot at `target`.
    ///
    /// Out-of-bounds and repeated targets change nothing; once a target
    /// has resolved to hit or miss, every later shot at it yields
    /// [`ShotResult::Repeated`].
    pub fn shoot(&mut self, target: Coord) -> ShotResult {
        if !self.in_bounds(target) {
            return ShotResult::OutOfBounds;
        }
        let (r, c) = (target.x as usize, target.y as usize);
        if self.shots.get(r, c).unwrap_or(false) {
            return ShotResult::Repeated;
        }
        let _ = self.shots.set(r, c);
        if !self.ship_map.get(r, c).unwrap_or(false) {
            let _ = self.misses.set(r, c);
            return ShotResult::Miss;
        }
        let _ = self.hits.set(r, c);
        for ship in self.ships.iter_mut().filter(|s| !s.is_sunk()) {
            if ship.register_hit(target) {
                if ship.is_sunk() {
                    self.alive -= 1;
                    return ShotResult::Sunk;
                }
                return ShotResult::Hit;
            }
        }
        // place() keeps ship_map and the ship list in sync, so an occupied
        // unshot cell always belongs to exactly one floating ship.
        ShotResult::Hit
    }

    pub fn in_bounds(&self, target: Coord) -> bool {
        (0..BOARD_SIZE as i32).contains(&target.x) && (0..BOARD_SIZE as i32).contains(&target.y)
    }

    /// True once every ship has been sunk.
    pub fn is_defeated(&self) -> bool {
        self.alive == 0
    }

    /// Ships with at least one intact segment.
    pub fn alive_ships(&self) -> usize {
        self.alive
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Cell-state matrix for rendering. Hit/miss marks win over raw
    /// occupancy so a damaged ship renders as damage.
    pub fn snapshot(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (r, c) in self.ship_map.cells() {
            grid[r][c] = Cell::Ship;
        }
        for (r, c) in self.misses.cells() {
            grid[r][c] = Cell::Miss;
        }
        for (r, c) in self.hits.cells() {
            grid[r][c] = Cell::Hit;
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
