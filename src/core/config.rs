//! Game configuration.
//!
//! A `GameConfig` fixes the board size and the opening player. It can only
//! be constructed valid, so starting a game from one never fails.

use super::error::ConfigError;
use super::player::Player;

/// Side length of the standard board.
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Smallest board on which both players have an opening move.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest accepted board side.
pub const MAX_BOARD_SIZE: usize = 256;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    board_size: usize,
    first_player: Player,
}

impl GameConfig {
    /// Create a configuration for a `board_size` x `board_size` game.
    pub fn new(board_size: usize) -> Result<Self, ConfigError> {
        if board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall {
                size: board_size,
                min: MIN_BOARD_SIZE,
            });
        }
        if board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: board_size,
                max: MAX_BOARD_SIZE,
            });
        }

        Ok(Self {
            board_size,
            first_player: Player::Vertical,
        })
    }

    /// Set which player moves first.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    #[must_use]
    pub fn first_player(&self) -> Player {
        self.first_player
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            first_player: Player::Vertical,
        }
    }
}
