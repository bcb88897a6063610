//! GameView: paints a `core::GameSnapshot` onto a render sink.
//!
//! The view only issues `clear`/`plot`/`present`; it never reads anything back
//! from the sink, so it can be tested against an in-memory framebuffer.

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::sink::RenderSink;

const PAUSE_BANNER: &str = "PAUSED";

/// Frame layout options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Draw the last key name in the top-left corner.
    show_status: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { show_status: true }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status_line(mut self, show: bool) -> Self {
        self.show_status = show;
        self
    }

    /// Paint one complete frame and present it.
    ///
    /// Draw order: status line, objects in snapshot order, then the pause
    /// banner so it stays readable over the ball.
    pub fn draw<S>(&self, snap: &GameSnapshot, status: Option<&str>, sink: &mut S) -> Result<()>
    where
        S: RenderSink + ?Sized,
    {
        sink.clear();

        if self.show_status {
            if let Some(text) = status {
                plot_str(sink, 0, 0, text);
            }
        }

        for object in snap.objects.iter() {
            sink.plot(
                object.row(),
                object.col(),
                object.width(),
                object.height(),
                object.glyph(),
            );
        }

        if !snap.playable() {
            let row = (snap.field.height / 2) as i32;
            let col = (snap.field.width as i32 - PAUSE_BANNER.chars().count() as i32) / 2;
            plot_str(sink, row, col.max(0), PAUSE_BANNER);
        }

        sink.present()
    }
}

fn plot_str<S: RenderSink + ?Sized>(sink: &mut S, row: i32, col: i32, text: &str) {
    for (i, ch) in text.chars().enumerate() {
        sink.plot(row, col + i as i32, 1, 1, ch);
    }
}
