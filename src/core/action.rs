//! Move representation: the anchor cell of a domino placement.
//!
//! A move names only the anchor `(row, col)`. The second cell follows from
//! the mover's orientation: the cell below for `Vertical`, the cell to the
//! right for `Horizontal`.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A domino placement, identified by its anchor cell.
///
/// ## Example
///
/// ```
/// use domineering::core::{Move, Player};
///
/// let mv = Move::new(2, 3);
/// assert_eq!(mv.covered_cells(Player::Vertical), [(2, 3), (3, 3)]);
/// assert_eq!(mv.covered_cells(Player::Horizontal), [(2, 3), (2, 4)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Both cells covered when `player` places a domino here.
    ///
    /// The second cell may lie off the board; legality is checked elsewhere.
    #[must_use]
    pub const fn covered_cells(self, player: Player) -> [(usize, usize); 2] {
        let (dr, dc) = player.domino_offset();
        [(self.row, self.col), (self.row + dr, self.col + dc)]
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
