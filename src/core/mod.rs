//! Core value types: players, cells, boards, moves, configuration, state.
//!
//! Everything here is a plain value. The rules that move a game forward live
//! in [`crate::rules`].

pub mod player;
pub mod board;
pub mod action;
pub mod config;
pub mod state;
pub mod error;

pub use player::{Player, PlayerMap};
pub use board::{Board, Cell};
pub use action::Move;
pub use config::{GameConfig, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use state::GameState;
pub use error::{BoardParseError, ConfigError, MoveRejection};
