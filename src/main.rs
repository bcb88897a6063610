//! Terminal Pong runner.
//!
//! Player 1: `w`/`s`. Player 2: arrow up/down. `p` pauses, `q` quits.

use std::thread;
use std::time::Instant;

use anyhow::{ensure, Result};
use tracing::info;

use tui_pong::core::GameState;
use tui_pong::input::InputSource;
use tui_pong::logging::init_tracing;
use tui_pong::term::{GameView, Screen};
use tui_pong::types::{MIN_FIELD_HEIGHT, MIN_FIELD_WIDTH};
use tui_pong::{Frame, GameConfig};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    if let Some(path) = config.log_path.as_deref() {
        init_tracing(path)?;
    }

    let mut screen = Screen::new()?;
    let field = screen.field();
    ensure!(
        field.width >= MIN_FIELD_WIDTH && field.height >= MIN_FIELD_HEIGHT,
        "terminal is {}x{}, need at least {}x{}",
        field.width,
        field.height,
        MIN_FIELD_WIDTH,
        MIN_FIELD_HEIGHT
    );

    screen.enter()?;
    let result = run(&mut screen, &config);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut Screen, config: &GameConfig) -> Result<()> {
    let mut state = GameState::new(screen.field());
    let mut input = InputSource::from_terminal()?;
    let mut frame = Frame::new(GameView::default());
    let tick = config.tick_duration();

    info!(
        width = state.field().width,
        height = state.field().height,
        tick_ms = config.tick_ms,
        "game started"
    );

    loop {
        let started = Instant::now();

        if frame.step(&mut state, input.poll(), screen)?.is_quit() {
            return Ok(());
        }

        if let Some(rest) = tick.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }
}
