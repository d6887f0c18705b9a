//! Domineering rules.
//!
//! Pure functions over core values:
//! - Which placements are legal (`legality`)
//! - How a placement changes the game, and when the game ends (`engine`)

pub mod legality;
pub mod engine;

pub use legality::{
    check_move, count_legal_moves, has_any_legal_move, is_legal_move, legal_moves, mobility,
};
pub use engine::{apply_move, try_apply_move, GameResult};
