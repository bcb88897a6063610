//! Rectangular entities on the play field.

use crate::types::{Player, Velocity, BALL_GLYPH, PADDLE_GLYPH, PADDLE_HEIGHT, PADDLE_WIDTH};

/// What an object is. Only used for lookups and rendering hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Paddle(Player),
    Ball,
}

/// A moving or stationary rectangle on the grid.
///
/// Position is the top-left cell and may briefly sit outside the field after a
/// bounce. Size is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameObject {
    kind: ObjectKind,
    row: i32,
    col: i32,
    width: u16,
    height: u16,
    velocity: Velocity,
    glyph: char,
}

impl GameObject {
    /// Create an object. Width and height are raised to at least 1.
    pub fn new(
        kind: ObjectKind,
        row: i32,
        col: i32,
        width: u16,
        height: u16,
        velocity: Velocity,
        glyph: char,
    ) -> Self {
        Self {
            kind,
            row,
            col,
            width: width.max(1),
            height: height.max(1),
            velocity,
            glyph,
        }
    }

    /// A stationary paddle for `player` with its top cell at `(row, col)`.
    pub fn paddle(player: Player, row: i32, col: i32) -> Self {
        Self::new(
            ObjectKind::Paddle(player),
            row,
            col,
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
            Velocity::ZERO,
            PADDLE_GLYPH,
        )
    }

    /// A 1x1 ball at `(row, col)`.
    pub fn ball(row: i32, col: i32, velocity: Velocity) -> Self {
        Self::new(ObjectKind::Ball, row, col, 1, 1, velocity, BALL_GLYPH)
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Row where the object will be after one more tick at its current velocity.
    pub fn next_row(&self) -> i32 {
        self.row + self.velocity.row
    }

    /// Column where the object will be after one more tick at its current velocity.
    pub fn next_col(&self) -> i32 {
        self.col + self.velocity.col
    }

    /// True if `row` falls within `[self.row, self.row + height)`.
    pub fn spans_row(&self, row: i32) -> bool {
        row >= self.row && row < self.row + self.height as i32
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    /// Shift the object vertically by `dy` rows.
    pub(crate) fn nudge_row(&mut self, dy: i32) {
        self.row += dy;
    }

    /// Apply one tick of velocity.
    pub(crate) fn advance(&mut self) {
        self.row += self.velocity.row;
        self.col += self.velocity.col;
    }
}
