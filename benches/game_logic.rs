use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_pong::core::GameState;
use tui_pong::term::{FrameBuffer, GameView};
use tui_pong::types::{Field, GameAction};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(Field::new(120, 40));

    c.bench_function("update_state", |b| {
        b.iter(|| {
            state.update_state();
        })
    });
}

fn bench_input(c: &mut Criterion) {
    let mut state = GameState::new(Field::new(120, 40));

    c.bench_function("handle_user_input", |b| {
        b.iter(|| {
            state.handle_user_input(black_box(Some(GameAction::Player1Down)));
            state.handle_user_input(black_box(Some(GameAction::Player1Up)));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(Field::new(120, 40));
    let snap = state.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(120, 40);

    c.bench_function("draw_frame_120x40", |b| {
        b.iter(|| {
            view.draw(black_box(&snap), Some("Rune[w]"), &mut fb).unwrap();
        })
    });
}

criterion_group!(benches, bench_tick, bench_input, bench_render);
criterion_main!(benches);
