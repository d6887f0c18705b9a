//! # domineering
//!
//! A rules engine for Domineering, the two-player domino placement game.
//!
//! Players take turns placing dominoes on a square grid. `Vertical` always
//! places vertical dominoes, `Horizontal` always places horizontal ones. The
//! first player unable to place a domino on their turn loses.
//!
//! ## Design
//!
//! - **Values, not objects**: `GameState` is an immutable value; `apply_move`
//!   returns a new state. Rejected moves return a state equal to the input.
//!
//! - **Persistent Data Structures**: boards are backed by `im::Vector`, so a
//!   state per move costs O(1) to clone.
//!
//! ## Example
//!
//! ```
//! use domineering::{apply_move, GameConfig, GameState, Player};
//!
//! let state = GameState::new(&GameConfig::new(2).unwrap());
//! let state = apply_move(&state, 0, 0);
//!
//! assert!(state.is_terminal());
//! assert_eq!(state.winner(), Some(Player::Vertical));
//! ```
//!
//! ## Modules
//!
//! - `core`: players, cells, boards, moves, configuration, state, errors
//! - `rules`: legality checks and the move transition

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardParseError, Cell, ConfigError, GameConfig, GameState, Move, MoveRejection,
    Player, PlayerMap, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};

pub use crate::rules::{
    apply_move, check_move, count_legal_moves, has_any_legal_move, is_legal_move, legal_moves,
    mobility, try_apply_move, GameResult,
};
