//! Legality scan and move application benchmarks on the standard board.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use domineering::core::{GameState, Player};
use domineering::rules::{apply_move, has_any_legal_move, legal_moves, mobility};

/// A 10x10 game played to the end with first-legal-move choices.
fn finished_game() -> Vec<GameState> {
    let mut states = vec![GameState::default()];
    while let Some(state) = states.last().filter(|s| !s.is_terminal()) {
        let mv = legal_moves(state.board(), state.current_player())[0];
        let next = apply_move(state, mv.row, mv.col);
        states.push(next);
    }
    states
}

fn bench_scan(c: &mut Criterion) {
    let states = finished_game();
    let last = states.last().cloned().unwrap_or_default();

    c.bench_function("has_any_legal_move/empty", |b| {
        let state = GameState::default();
        b.iter(|| has_any_legal_move(black_box(state.board()), Player::Horizontal))
    });

    // Worst case: the loser's scan exhausts the board.
    c.bench_function("has_any_legal_move/terminal", |b| {
        b.iter(|| has_any_legal_move(black_box(last.board()), last.current_player()))
    });

    c.bench_function("mobility/empty", |b| {
        let state = GameState::default();
        b.iter(|| mobility(black_box(state.board())))
    });
}

fn bench_playout(c: &mut Criterion) {
    c.bench_function("apply_move/full_game", |b| b.iter(finished_game));

    c.bench_function("state_clone", |b| {
        let states = finished_game();
        let mid = &states[states.len() / 2];
        b.iter(|| black_box(mid).clone())
    });
}

criterion_group!(benches, bench_scan, bench_playout);
criterion_main!(benches);
