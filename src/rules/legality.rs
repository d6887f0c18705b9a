//! Move legality: which anchors a player may place a domino on.

use crate::core::{Board, Move, MoveRejection, Player, PlayerMap};

/// Check a placement for `player` anchored at `(row, col)`.
///
/// Returns the first reason the placement is impossible, or `Ok(())`.
/// Does not consider whose turn it is or whether the game is over.
pub fn check_move(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
) -> Result<(), MoveRejection> {
    let size = board.size();
    if !board.contains(row, col) {
        return Err(MoveRejection::OutOfBounds { row, col, size });
    }

    let [anchor, (pr, pc)] = Move::new(row, col).covered_cells(player);
    if !board.contains(pr, pc) {
        return Err(MoveRejection::WrongOrientationUnavailable { player, row, col });
    }

    for (r, c) in [anchor, (pr, pc)] {
        if !board.is_empty_at(r, c) {
            return Err(MoveRejection::CellOccupied { row: r, col: c });
        }
    }
    Ok(())
}

/// Check whether `player` may place a domino anchored at `(row, col)`.
///
/// Out-of-range coordinates are simply illegal.
#[must_use]
pub fn is_legal_move(board: &Board, player: Player, row: usize, col: usize) -> bool {
    check_move(board, player, row, col).is_ok()
}

/// Check whether `player` has at least one legal placement.
///
/// Stops at the first legal anchor found in row-major order.
#[must_use]
pub fn has_any_legal_move(board: &Board, player: Player) -> bool {
    anchors(board).any(|(row, col)| is_legal_move(board, player, row, col))
}

/// Every legal placement for `player`, in row-major order.
#[must_use]
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    anchors(board)
        .filter(|&(row, col)| is_legal_move(board, player, row, col))
        .map(Move::from)
        .collect()
}

/// Number of legal placements for `player`.
#[must_use]
pub fn count_legal_moves(board: &Board, player: Player) -> usize {
    anchors(board)
        .filter(|&(row, col)| is_legal_move(board, player, row, col))
        .count()
}

/// Legal placement count for both players.
#[must_use]
pub fn mobility(board: &Board) -> PlayerMap<usize> {
    PlayerMap::new(|player| count_legal_moves(board, player))
}

fn anchors(board: &Board) -> impl Iterator<Item = (usize, usize)> {
    let size = board.size();
    (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
}
