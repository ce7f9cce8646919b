use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stackfall::core::{Board, GameSnapshot, GameState, PieceQueue};
use stackfall::term::{FrameBuffer, GameView};
use stackfall::types::GameAction;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            state.tick(black_box(16));
        })
    });
}

fn bench_line_sweep(c: &mut Criterion) {
    c.bench_function("sweep_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::from_rows(&[
                "T.........",
                "XXXXXXXXXX",
                "XXXXXXXXXX",
                "XXXXXXXXXX",
                "XXXXXXXXXX",
            ]);
            black_box(board.sweep_full_lines());
        })
    });
}

fn bench_queue(c: &mut Criterion) {
    let mut queue = PieceQueue::new(12345);

    c.bench_function("queue_dequeue_refill", |b| {
        b.iter(|| {
            queue.ensure(5);
            black_box(queue.dequeue_next());
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.try_move(1, 0);
            state.try_move(-1, 0);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("rotate_with_kicks", |b| {
        b.iter(|| {
            state.rotate(black_box(1));
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("hard_drop_lock_spawn", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            state.apply_action(GameAction::HardDrop);
        })
    });
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let view = GameView::default();
    let viewport = view.preferred_size();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("snapshot_into", |b| {
        b.iter(|| state.snapshot_into(black_box(&mut snap)))
    });

    c.bench_function("render_into", |b| {
        b.iter(|| view.render_into(black_box(&snap), viewport, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_sweep,
    bench_queue,
    bench_try_move,
    bench_rotate,
    bench_hard_drop,
    bench_snapshot_and_render
);
criterion_main!(benches);
