use crate::rng::Rng;
use crate::{AREA, EMPTY, SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Printed width of one cell, separator included.
const CELL_WIDTH: usize = 5;

/// Placeholder shown for the blank cell.
const EMPTY_CHAR: char = '.';

/// A cell coordinate; (0,0) is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Direction a numbered tile slides, with the blank moving the opposite way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Error for a direction token outside the WASD command set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError;

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "direction must be one of w, a, s, d")
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts the WASD tokens: `w` up, `s` down, `a` left, `d` right.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "w" => Ok(Direction::Up),
            "s" => Ok(Direction::Down),
            "a" => Ok(Direction::Left),
            "d" => Ok(Direction::Right),
            _ => Err(ParseDirectionError),
        }
    }
}

/// Why a supplied tile ordering cannot populate a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The ordering does not have exactly one entry per cell.
    WrongLength(usize),
    /// The smallest value of 1..=16 absent from the ordering.
    Missing(u8),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongLength(len) => {
                write!(f, "expected {AREA} numbers, got {len}")
            }
            LayoutError::Missing(tile) => write!(f, "number {tile} is missing"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Why a move request was rejected. The grid is untouched on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Tile identifier outside 1..=15; the blank itself is never a target.
    InvalidTile(u8),
    /// The tile is not adjacent to the blank on the side the move needs.
    NotAdjacent { dir: Direction, tile: u8 },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidTile(tile) => write!(f, "invalid tile number: {tile}"),
            MoveError::NotAdjacent { dir, tile } => {
                write!(f, "tile {tile} cannot move {dir}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// The puzzle grid: a permutation of 1..=16 stored row-major, where 16 marks
/// the blank cell. All constructors establish the permutation invariant and
/// only successful moves mutate the grid afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [u8; AREA],
}

impl Board {
    /// The solved board: 1..=15 ascending with the blank bottom-right.
    pub fn solved() -> Self {
        let mut cells = [0u8; AREA];
        for (idx, cell) in cells.iter_mut().enumerate() {
            *cell = idx as u8 + 1;
        }
        Self { cells }
    }

    /// Populate from an explicit ordering, filled row-major.
    ///
    /// The ordering must be a permutation of 1..=16; otherwise the smallest
    /// missing value (or a length mismatch) is reported.
    pub fn from_layout(layout: &[u8]) -> Result<Self, LayoutError> {
        validate_layout(layout)?;
        let mut cells = [0u8; AREA];
        cells.copy_from_slice(layout);
        Ok(Self { cells })
    }

    /// Validate an ordering, then populate from its seeded shuffle.
    pub fn shuffled_from(layout: &[u8], seed: u64) -> Result<Self, LayoutError> {
        let mut board = Self::from_layout(layout)?;
        scramble(&mut board.cells, seed);
        Ok(board)
    }

    /// Populate from a seeded shuffle of the canonical ascending layout.
    pub fn from_seed(seed: u64) -> Self {
        let mut board = Self::solved();
        scramble(&mut board.cells, seed);
        board
    }

    /// Value copy of the grid, row-major.
    pub fn grid(&self) -> [u8; AREA] {
        self.cells
    }

    /// Tile at the given cell. Coordinates outside the grid are a programmer
    /// error and panic.
    pub fn value_at(&self, row: usize, col: usize) -> u8 {
        assert!(row < SIZE && col < SIZE, "cell ({row},{col}) out of range");
        self.cells[row * SIZE + col]
    }

    /// Position of a tile, scanning row-major. `None` only if the tile is not
    /// on the board at all, which the permutation invariant rules out for
    /// identifiers in 1..=16.
    pub fn locate(&self, tile: u8) -> Option<Position> {
        self.cells
            .iter()
            .position(|&cell| cell == tile)
            .map(|idx| Position::new(idx / SIZE, idx % SIZE))
    }

    /// Row-major rank of a cell, 1-based: `row * 4 + col + 1`.
    pub fn ordinal_of(row: usize, col: usize) -> u8 {
        (row * SIZE + col) as u8 + 1
    }

    /// Slide a tile one step in the given direction into the blank.
    ///
    /// Legal only when the tile sits on the opposite side of the blank from
    /// its motion, e.g. a left move needs the tile immediately right of the
    /// blank. The grid is mutated only on `Ok`.
    pub fn move_tile(&mut self, dir: Direction, tile: u8) -> Result<(), MoveError> {
        if tile < 1 || tile > (AREA - 1) as u8 {
            return Err(MoveError::InvalidTile(tile));
        }

        let (blank, target) = match (self.locate(EMPTY), self.locate(tile)) {
            (Some(blank), Some(target)) => (blank, target),
            _ => return Err(MoveError::NotAdjacent { dir, tile }),
        };

        let legal = match dir {
            Direction::Left => target.col == blank.col + 1,
            Direction::Right => target.col + 1 == blank.col,
            Direction::Up => target.row == blank.row + 1,
            Direction::Down => target.row + 1 == blank.row,
        };
        if !legal {
            return Err(MoveError::NotAdjacent { dir, tile });
        }

        self.swap(blank, target);
        Ok(())
    }

    /// Whether the grid can reach the solved state through legal slides.
    ///
    /// Works on a clone: first the blank is walked to the bottom row by
    /// sliding the tile below it up, one step at a time; then every tile's
    /// inversions are summed. A tile's inversion count is the number of cells
    /// after it in reading order holding a smaller value. Even sum means
    /// solvable.
    pub fn is_solvable(&self) -> bool {
        let mut probe = self.clone();

        while let Some(blank) = probe.locate(EMPTY) {
            if blank.row == SIZE - 1 {
                break;
            }
            let below = probe.value_at(blank.row + 1, blank.col);
            if probe.move_tile(Direction::Up, below).is_err() {
                break;
            }
        }

        let mut inversions = 0usize;
        for tile in 1..AREA as u8 {
            let Some(pos) = probe.locate(tile) else {
                continue;
            };
            let ordinal = Self::ordinal_of(pos.row, pos.col);
            for row in 0..SIZE {
                for col in 0..SIZE {
                    if Self::ordinal_of(row, col) <= ordinal {
                        continue;
                    }
                    if probe.value_at(row, col) < tile {
                        inversions += 1;
                    }
                }
            }
        }

        inversions % 2 == 0
    }

    /// Whether every cell holds its reading-order rank, blank included.
    pub fn is_solved(&self) -> bool {
        (0..SIZE).all(|row| {
            (0..SIZE).all(|col| self.value_at(row, col) == Self::ordinal_of(row, col))
        })
    }

    fn set_value_at(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row * SIZE + col] = value;
    }

    /// Swap two cells' values. Silently a no-op when either position falls
    /// outside the grid, so a bad position cannot corrupt state.
    fn swap(&mut self, a: Position, b: Position) {
        if a.row >= SIZE || a.col >= SIZE || b.row >= SIZE || b.col >= SIZE {
            return;
        }
        let held = self.value_at(a.row, a.col);
        self.set_value_at(a.row, a.col, self.value_at(b.row, b.col));
        self.set_value_at(b.row, b.col, held);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(CELL_WIDTH * SIZE + 1);
        for row in 0..SIZE {
            writeln!(f, "{rule}")?;
            for col in 0..SIZE {
                let value = self.value_at(row, col);
                if value == EMPTY {
                    write!(f, "|{EMPTY_CHAR:>width$}", width = CELL_WIDTH - 1)?;
                } else {
                    write!(f, "|{value:>width$}", width = CELL_WIDTH - 1)?;
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "{rule}")
    }
}

/// Check that an ordering is a permutation of 1..=16, scanning ascending so
/// the first missing value is the smallest one.
fn validate_layout(layout: &[u8]) -> Result<(), LayoutError> {
    if layout.len() != AREA {
        return Err(LayoutError::WrongLength(layout.len()));
    }
    for tile in 1..=AREA as u8 {
        if !layout.contains(&tile) {
            return Err(LayoutError::Missing(tile));
        }
    }
    Ok(())
}

/// The reference shuffle: one pass over the cells, swapping each index with a
/// partner drawn over the whole range. Deliberately not a shrinking-range
/// Fisher-Yates; the historic procedure is kept so a seed keeps producing the
/// grid it always has.
fn scramble(cells: &mut [u8; AREA], seed: u64) {
    let mut rng = Rng::with_seed(seed);
    for i in 0..cells.len() {
        let j = rng.next_below(cells.len());
        cells.swap(i, j);
    }
}
