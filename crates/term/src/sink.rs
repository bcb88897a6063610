//! The drawing surface a game view paints onto.

use anyhow::Result;

/// Something the game can be painted on, one frame at a time.
///
/// Coordinates are signed so objects that have briefly left the field can be
/// passed through unchanged; implementations clip what falls outside.
pub trait RenderSink {
    /// Blank the whole surface.
    fn clear(&mut self);

    /// Fill a `width` x `height` rectangle with `glyph`, top-left at `(row, col)`.
    fn plot(&mut self, row: i32, col: i32, width: u16, height: u16, glyph: char);

    /// Make everything plotted since the last `clear` visible.
    fn present(&mut self) -> Result<()>;
}
