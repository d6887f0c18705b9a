//! The game transition: placing a domino and detecting the end of the game.
//!
//! A Domineering game ends when the player to move has no legal placement.
//! That player loses; the player who made the last placement wins. There are
//! no draws.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::legality::{check_move, has_any_legal_move};
use crate::core::{GameState, MoveRejection, Player};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    winner: Player,
}

impl GameResult {
    #[must_use]
    pub const fn new(winner: Player) -> Self {
        Self { winner }
    }

    #[must_use]
    pub const fn winner(self) -> Player {
        self.winner
    }

    #[must_use]
    pub const fn loser(self) -> Player {
        self.winner.other()
    }
}

/// Apply the current player's placement at `(row, col)`.
///
/// On success the new state has the domino placed, the turn passed to the
/// opponent, and `terminal` set if that opponent has no legal placement.
/// On rejection the input state is not modified.
#[instrument(level = "trace", skip(state), fields(player = %state.current_player()))]
pub fn try_apply_move(
    state: &GameState,
    row: usize,
    col: usize,
) -> Result<GameState, MoveRejection> {
    let mover = state.current_player();
    let checked = if state.is_terminal() {
        Err(MoveRejection::GameAlreadyOver)
    } else {
        check_move(state.board(), mover, row, col)
    };
    if let Err(reason) = checked {
        debug!(%mover, row, col, %reason, "move rejected");
        return Err(reason);
    }

    let board = state.board().with_domino(mover, row, col);
    let next = mover.other();
    // Mobility is checked for the player about to move, not the mover.
    let terminal = !has_any_legal_move(&board, next);
    trace!(%mover, row, col, "domino placed");
    if terminal {
        debug!(winner = %mover, loser = %next, "game over");
    }

    Ok(GameState::from_parts(board, next, terminal))
}

/// Apply the current player's placement at `(row, col)`, ignoring illegal
/// moves.
///
/// A rejected move returns a state equal to `state`. Use [`try_apply_move`]
/// to learn why a move was rejected.
#[must_use]
pub fn apply_move(state: &GameState, row: usize, col: usize) -> GameState {
    try_apply_move(state, row, col).unwrap_or_else(|_| state.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Cell, GameConfig};

    fn new_game(size: usize) -> GameState {
        GameState::new(&GameConfig::new(size).unwrap())
    }

    #[test]
    fn test_game_result_sides() {
        let result = GameResult::new(Player::Horizontal);

        assert_eq!(result.winner(), Player::Horizontal);
        assert_eq!(result.loser(), Player::Vertical);
    }

    #[test]
    fn test_apply_places_domino_and_switches_player() {
        let state = new_game(4);
        let next = apply_move(&state, 1, 2);

        assert_eq!(next.board().get(1, 2), Some(Cell::Occupied(Player::Vertical)));
        assert_eq!(next.board().get(2, 2), Some(Cell::Occupied(Player::Vertical)));
        assert_eq!(next.board().occupied_count(), 2);
        assert_eq!(next.current_player(), Player::Horizontal);
        assert!(!next.is_terminal());

        // Input untouched
        assert_eq!(state.board().occupied_count(), 0);
        assert_eq!(state.current_player(), Player::Vertical);
    }

    #[test]
    fn test_two_by_two_ends_immediately() {
        let state = new_game(2);
        let next = apply_move(&state, 0, 0);

        assert!(next.is_terminal());
        assert_eq!(next.current_player(), Player::Horizontal);
        assert_eq!(next.winner(), Some(Player::Vertical));
        assert_eq!(next.loser(), Some(Player::Horizontal));
    }

    #[test]
    fn test_rejection_reasons() {
        let state = new_game(3);

        assert_eq!(
            try_apply_move(&state, 2, 0),
            Err(MoveRejection::WrongOrientationUnavailable {
                player: Player::Vertical,
                row: 2,
                col: 0
            })
        );
        assert_eq!(
            try_apply_move(&state, 3, 0),
            Err(MoveRejection::OutOfBounds {
                row: 3,
                col: 0,
                size: 3
            })
        );

        let placed = apply_move(&state, 0, 0);
        assert_eq!(
            try_apply_move(&placed, 0, 0),
            Err(MoveRejection::CellOccupied { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_rejected_move_returns_equal_state() {
        let state = apply_move(&new_game(3), 0, 0);

        assert_eq!(apply_move(&state, 0, 0), state);
        assert_eq!(apply_move(&state, 9, 9), state);
    }

    #[test]
    fn test_terminal_state_is_absorbing() {
        let finished = apply_move(&new_game(2), 0, 0);
        assert!(finished.is_terminal());

        // (0, 1) is still a legal vertical anchor, but the game is over.
        assert_eq!(
            try_apply_move(&finished, 0, 1),
            Err(MoveRejection::GameAlreadyOver)
        );
        assert_eq!(apply_move(&finished, 0, 1), finished);
    }

    #[test]
    fn test_checks_new_current_player_mobility() {
        let board: Board = "
            V..
            V..
            HH.
        "
        .parse()
        .unwrap();
        let state = GameState::from_board(board, Player::Vertical);
        assert!(!state.is_terminal());

        // Vertical still has column 2 afterwards, but Horizontal is stuck.
        let next = apply_move(&state, 0, 1);
        assert!(crate::rules::has_any_legal_move(next.board(), Player::Vertical));
        assert!(next.is_terminal());
        assert_eq!(next.current_player(), Player::Horizontal);
        assert_eq!(next.winner(), Some(Player::Vertical));
    }
}
