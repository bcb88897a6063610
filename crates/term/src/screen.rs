//! The real terminal as a render sink.

use anyhow::Result;

use crate::fb::{FrameBuffer, BLANK};
use crate::renderer::TerminalRenderer;
use crate::sink::RenderSink;
use crate::types::Field;

/// Back buffer plus terminal renderer. Plots land in the back buffer and
/// `present` flushes the difference to the terminal.
pub struct Screen {
    renderer: TerminalRenderer,
    back: FrameBuffer,
}

impl Screen {
    /// Query the current terminal size once; the field never resizes.
    pub fn new() -> Result<Self> {
        let (width, height) = TerminalRenderer::size()?;
        Ok(Self::with_size(width, height))
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            back: FrameBuffer::new(width, height),
        }
    }

    /// Play-field geometry: the whole screen.
    pub fn field(&self) -> Field {
        Field::new(self.back.width(), self.back.height())
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()?;
        self.renderer.invalidate();
        Ok(())
    }

    /// Restore the terminal. Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl RenderSink for Screen {
    fn clear(&mut self) {
        self.back.fill(BLANK);
    }

    fn plot(&mut self, row: i32, col: i32, width: u16, height: u16, glyph: char) {
        self.back.plot(row, col, width, height, glyph);
    }

    fn present(&mut self) -> Result<()> {
        self.renderer.draw_swap(&mut self.back)
    }
}
