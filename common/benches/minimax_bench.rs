use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_common::engine::tictactoe::{
    AI_MARK, Board, BotInput, Mark, TicTacToeGameState, best_move, calculate_minimax_move,
};

fn bench_full_game_self_play() {
    let mut state = TicTacToeGameState::new();

    while let Some(index) = calculate_minimax_move(&BotInput::from_game_state(&state)) {
        let mark = state.current_mark();
        if state.apply_move(index, mark).is_err() {
            break;
        }
    }

    black_box(state);
}

fn bench_first_move_empty_board() {
    black_box(best_move(black_box(&Board::new()), Mark::X));
}

fn bench_reply_to_center() {
    let board = Board::from_symbols(["", "", "", "", "X", "", "", "", ""])
        .expect("valid board");
    black_box(best_move(black_box(&board), AI_MARK));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("self_play_game", |b| b.iter(bench_full_game_self_play));

    group.bench_function("first_move_empty", |b| b.iter(bench_first_move_empty_board));

    group.bench_function("reply_to_center", |b| b.iter(bench_reply_to_center));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
