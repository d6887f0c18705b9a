//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Domineering has exactly two players, named after the orientation of the
//! dominoes they place.
//!
//! ## PlayerMap
//!
//! Two-slot per-player storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A Domineering player.
///
/// The player's identity fixes the orientation of every domino they place:
/// `Vertical` covers a cell and the one below it, `Horizontal` covers a cell
/// and the one to its right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Vertical,
    Horizontal,
}

impl Player {
    /// Both players, in turn order starting with `Vertical`.
    pub const ALL: [Player; 2] = [Player::Vertical, Player::Horizontal];

    /// The opponent.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::Vertical => Player::Horizontal,
            Player::Horizontal => Player::Vertical,
        }
    }

    /// Slot index (0 for `Vertical`, 1 for `Horizontal`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Vertical => 0,
            Player::Horizontal => 1,
        }
    }

    /// Offset from a domino's anchor cell to its second cell, as `(dr, dc)`.
    #[must_use]
    pub const fn domino_offset(self) -> (usize, usize) {
        match self {
            Player::Vertical => (1, 0),
            Player::Horizontal => (0, 1),
        }
    }

    /// Single-character symbol used in board text.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::Vertical => 'V',
            Player::Horizontal => 'H',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use domineering::core::{Player, PlayerMap};
///
/// let mut placed: PlayerMap<u32> = PlayerMap::with_value(0);
/// placed[Player::Horizontal] += 1;
///
/// assert_eq!(placed[Player::Vertical], 0);
/// assert_eq!(placed[Player::Horizontal], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: Player::ALL.map(factory),
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
