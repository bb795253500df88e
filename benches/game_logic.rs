use criterion::{black_box, criterion_group, criterion_main, Criterion};
use term_tetris::core::{Board, GameSnapshot, GameState};
use term_tetris::term::{FrameBuffer, GameView, Viewport};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_game();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if state.game_over() {
                state.start_game();
            }
            black_box(state.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in [5, 9, 16, 19] {
                for x in 0..10 {
                    board.set(x, y, true);
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_move_piece(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_game();

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            state.move_piece(black_box(-1), 0);
            state.move_piece(black_box(1), 0);
        })
    });
}

fn bench_rotate_piece(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_game();
    for _ in 0..8 {
        state.move_piece(0, 1);
    }

    c.bench_function("rotate_piece", |b| {
        b.iter(|| {
            black_box(state.rotate_piece());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_game();
    let mut snap = GameSnapshot::default();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_move_piece,
    bench_rotate_piece,
    bench_render
);
criterion_main!(benches);
