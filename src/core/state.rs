//! Game state: the board, whose turn it is, and whether the game is over.
//!
//! `GameState` is an immutable value. The only transition is
//! [`rules::apply_move`](crate::rules::apply_move) (or its strict form
//! [`rules::try_apply_move`](crate::rules::try_apply_move)), which returns a
//! new state and leaves the input untouched.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::config::GameConfig;
use super::player::Player;
use crate::rules::{has_any_legal_move, GameResult};

/// Complete game state.
///
/// Cloning is cheap: the board is backed by a persistent vector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    terminal: bool,
}

impl GameState {
    /// Create the opening state: empty board, `config.first_player()` to move.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(config.board_size()),
            current_player: config.first_player(),
            terminal: false,
        }
    }

    /// Create a state from an existing position.
    ///
    /// The state is terminal if `current_player` has no legal move on `board`.
    #[must_use]
    pub fn from_board(board: Board, current_player: Player) -> Self {
        let terminal = !has_any_legal_move(&board, current_player);
        Self {
            board,
            current_player,
            terminal,
        }
    }

    pub(crate) fn from_parts(board: Board, current_player: Player, terminal: bool) -> Self {
        Self {
            board,
            current_player,
            terminal,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move, or the loser once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` once terminal, `None` while the game continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.terminal
            .then(|| GameResult::new(self.current_player.other()))
    }

    /// The player who made the last move of a finished game.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.result().map(|r| r.winner())
    }

    /// The player left without a move in a finished game.
    #[must_use]
    pub fn loser(&self) -> Option<Player> {
        self.result().map(|r| r.loser())
    }
}

impl Default for GameState {
    /// Standard 10x10 game, Vertical to move.
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    #[test]
    fn test_new_state() {
        let state = GameState::new(&GameConfig::new(5).unwrap());

        assert_eq!(state.board().size(), 5);
        assert_eq!(state.current_player(), Player::Vertical);
        assert!(!state.is_terminal());
        assert!(state.result().is_none());
        assert!(state.board().iter().all(|(_, _, c)| c == Cell::Empty));
    }

    #[test]
    fn test_default_state() {
        let state = GameState::default();

        assert_eq!(state.board().size(), 10);
        assert_eq!(state.current_player(), Player::Vertical);
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_first_player_override() {
        let config = GameConfig::new(4)
            .unwrap()
            .with_first_player(Player::Horizontal);
        let state = GameState::new(&config);

        assert_eq!(state.current_player(), Player::Horizontal);
    }

    #[test]
    fn test_from_board_detects_terminal() {
        let board: Board = "V.\nV.".parse().unwrap();

        let horizontal = GameState::from_board(board.clone(), Player::Horizontal);
        assert!(horizontal.is_terminal());
        assert_eq!(horizontal.winner(), Some(Player::Vertical));
        assert_eq!(horizontal.loser(), Some(Player::Horizontal));

        let vertical = GameState::from_board(board, Player::Vertical);
        assert!(!vertical.is_terminal());
        assert_eq!(vertical.winner(), None);
    }
}
