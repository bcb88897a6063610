//! Framebuffer for terminal rendering.

use anyhow::Result;

use crate::sink::RenderSink;

/// Glyph of an unpainted cell.
pub const BLANK: char = ' ';

/// 2D framebuffer of character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, BLANK);
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    pub fn fill(&mut self, ch: char) {
        self.cells.fill(ch);
    }

    /// Fill a rectangle given in signed cell coordinates, clipping to the buffer.
    pub fn fill_rect(&mut self, row: i32, col: i32, w: u16, h: u16, ch: char) {
        let top = row.max(0);
        let left = col.max(0);
        let bottom = (row + h as i32).min(self.height as i32);
        let right = (col + w as i32).min(self.width as i32);

        for y in top..bottom {
            for x in left..right {
                self.set(x as u16, y as u16, ch);
            }
        }
    }

    /// Row `y` as a string, for tests and debugging.
    pub fn row_string(&self, y: u16) -> String {
        (0..self.width)
            .map(|x| self.get(x, y).unwrap_or(BLANK))
            .collect()
    }
}

/// An offscreen sink: plotting writes cells, presenting does nothing.
impl RenderSink for FrameBuffer {
    fn clear(&mut self) {
        self.fill(BLANK);
    }

    fn plot(&mut self, row: i32, col: i32, width: u16, height: u16, glyph: char) {
        self.fill_rect(row, col, width, height, glyph);
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}
