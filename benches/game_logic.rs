use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{Board, GameEngine};
use tui_snake::term::{GameView, Viewport};
use tui_snake::types::{CellState, Direction, Pos};

/// Freshly started engine on the default 20x20 board.
fn circling_engine() -> GameEngine {
    let mut game = GameEngine::seeded(12345);
    game.start();
    game
}

fn bench_tick(c: &mut Criterion) {
    let mut game = circling_engine();
    let turns = [Direction::Left, Direction::Down, Direction::Right, Direction::Up];
    let mut step = 0usize;

    c.bench_function("tick", |b| {
        b.iter(|| {
            // Turn every 4 ticks: a 4x4 square loop that stays on the board.
            if step % 4 == 0 {
                game.set_direction(turns[(step / 4) % 4]);
            }
            step += 1;
            black_box(game.tick());
        })
    });
}

fn bench_spawn_apple_crowded(c: &mut Criterion) {
    c.bench_function("spawn_apple_crowded", |b| {
        b.iter(|| {
            let mut game = circling_engine();
            for _ in 0..390 {
                game.spawn_apple();
            }
            black_box(game.spawn_apple());
        })
    });
}

fn bench_board_scan(c: &mut Criterion) {
    let mut board = Board::new(20, 20);
    for x in 0..20 {
        board.set(Pos::new(x, 7), CellState::Snake);
    }

    c.bench_function("board_nth_empty", |b| {
        b.iter(|| black_box(board.nth_empty(black_box(350))))
    });
}

fn bench_render(c: &mut Criterion) {
    let game = circling_engine();
    let view = GameView::default();
    let mut fb = tui_snake::term::FrameBuffer::new(80, 24);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| view.render_into(black_box(&game), Viewport::new(80, 24), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_spawn_apple_crowded,
    bench_board_scan,
    bench_render
);
criterion_main!(benches);
