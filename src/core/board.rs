//! The Domineering board: a square grid of cells covered by dominoes.
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a board is O(1)
//! and placing a domino copies only the touched chunks. Every move produces
//! a new `Board`; existing boards are never modified in place.
//!
//! ## Text form
//!
//! One line per row, one character per cell: `.` empty, `V` covered by a
//! vertical domino, `H` covered by a horizontal domino.
//!
//! ```
//! use domineering::core::{Board, Cell, Player};
//!
//! let board: Board = "V.\nV.".parse().unwrap();
//! assert_eq!(board.get(1, 0), Some(Cell::Occupied(Player::Vertical)));
//! assert_eq!(board.to_string(), "V.\nV.");
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::BoardParseError;
use super::player::Player;

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// Covered by one half of a domino placed by this player.
    Occupied(Player),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player whose domino covers this cell.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// A square Domineering board.
///
/// Deserialization applies the same checks as parsing the text form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vector<Cell>,
}

/// Unchecked serialized form of a `Board`.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vector<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardParseError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let RawBoard { size, cells } = raw;
        let got = cells.len();
        match size.checked_mul(size) {
            Some(expected) if expected == got => Self { size, cells }.validated(),
            expected => Err(BoardParseError::CellCount {
                size,
                expected: expected.unwrap_or(usize::MAX),
                got,
            }),
        }
    }
}

impl Board {
    /// Create an empty `size` x `size` board.
    ///
    /// The size is not bounded here; `GameConfig` limits it for real games.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: std::iter::repeat(Cell::Empty).take(size * size).collect(),
        }
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether `(row, col)` lies on the board.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Get the cell at `(row, col)`, or `None` if off the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).and_then(|i| self.cells.get(i).copied())
    }

    /// Check whether `(row, col)` is on the board and empty.
    #[must_use]
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_empty)
    }

    /// Number of covered cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Iterate over `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / size, i % size, cell))
    }

    /// Return a copy of this board with `player`'s domino anchored at
    /// `(row, col)`.
    ///
    /// Callers must have checked legality; both cells are overwritten.
    pub(crate) fn with_domino(&self, player: Player, row: usize, col: usize) -> Self {
        let (dr, dc) = player.domino_offset();
        let mut cells = self.cells.clone();
        for (r, c) in [(row, col), (row + dr, col + dc)] {
            if let Some(i) = self.index(r, c) {
                cells.set(i, Cell::Occupied(player));
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.contains(row, col).then(|| row * self.size + col)
    }

    fn validated(self) -> Result<Self, BoardParseError> {
        for player in Player::ALL {
            self.check_pairing(player)?;
        }
        Ok(self)
    }

    /// Check that every run of `player` cells along the player's orientation
    /// has even length, i.e. the cells tile into that player's dominoes.
    fn check_pairing(&self, player: Player) -> Result<(), BoardParseError> {
        let vertical = player == Player::Vertical;
        for line in 0..self.size {
            let mut run_start = None;
            let mut run_len = 0usize;
            // One extra step flushes a run that touches the board edge.
            for step in 0..=self.size {
                let (row, col) = if vertical { (step, line) } else { (line, step) };
                if self.get(row, col).and_then(Cell::owner) == Some(player) {
                    run_start.get_or_insert((row, col));
                    run_len += 1;
                    continue;
                }
                if let Some((row, col)) = run_start.take() {
                    if run_len % 2 != 0 {
                        return Err(BoardParseError::UnpairedCells { player, row, col });
                    }
                }
                run_len = 0;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, col, cell) in self.iter() {
            if col == 0 && row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(BoardParseError::Empty);
        }

        let size = rows.len();
        let mut cells = Vector::new();
        for (row, line) in rows.iter().enumerate() {
            let got = line.chars().count();
            if got != size {
                return Err(BoardParseError::NotSquare {
                    row,
                    got,
                    expected: size,
                });
            }
            for (col, character) in line.chars().enumerate() {
                let cell = match character {
                    '.' => Cell::Empty,
                    'V' => Cell::Occupied(Player::Vertical),
                    'H' => Cell::Occupied(Player::Horizontal),
                    _ => return Err(BoardParseError::InvalidCell { character, row, col }),
                };
                cells.push_back(cell);
            }
        }

        Self { size, cells }.validated()
    }
}
