//! One frame of the game loop: input, render, physics.

use anyhow::Result;
use crossterm::event::KeyEvent;
use tracing::info;

use crate::core::{GameSnapshot, GameState};
use crate::input::{handle_key_event, key_name};
use crate::term::{GameView, RenderSink};
use crate::types::Control;

/// Per-frame driver. Holds what must survive between frames: the view, the
/// name of the last key pressed and a reusable snapshot.
#[derive(Debug, Default)]
pub struct Frame {
    view: GameView,
    last_key: Option<String>,
    snapshot: GameSnapshot,
}

impl Frame {
    pub fn new(view: GameView) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    pub fn last_key(&self) -> Option<&str> {
        self.last_key.as_deref()
    }

    /// Run one frame.
    ///
    /// Applies `key` (if any), paints the resulting state, then advances the
    /// physics by one tick. A quit key stops before anything is drawn.
    pub fn step<S>(&mut self, state: &mut GameState, key: Option<KeyEvent>, sink: &mut S) -> Result<Control>
    where
        S: RenderSink + ?Sized,
    {
        if let Some(key) = key {
            self.last_key = Some(key_name(key));
        }

        if state.handle_user_input(key.and_then(handle_key_event)).is_quit() {
            info!("quit requested");
            return Ok(Control::Quit);
        }

        state.snapshot_into(&mut self.snapshot);
        self.view.draw(&self.snapshot, self.last_key.as_deref(), sink)?;

        state.update_state();
        Ok(Control::Continue)
    }
}
