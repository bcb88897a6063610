//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 75 | Fixed timestep interval |
//! | `PADDLE_HEIGHT` | 4 | Paddle height in cells |
//! | `PADDLE_WIDTH` | 1 | Paddle width in cells |
//! | `BALL_START_VELOCITY` | (1, 1) | Ball velocity at kickoff (rows, cols per tick) |
//!
//! # Examples
//!
//! ```
//! use tui_pong_types::{Boundary, GameAction, Velocity, PADDLE_HEIGHT};
//!
//! let action = GameAction::Player1Up;
//! assert_eq!(action.player_move(), Some((tui_pong_types::Player::One, Boundary::Top)));
//!
//! let v = Velocity::new(1, -2).flip_col();
//! assert_eq!(v, Velocity::new(1, 2));
//!
//! assert_eq!(PADDLE_HEIGHT, 4);
//! ```

/// Fixed timestep interval in milliseconds.
pub const TICK_MS: u32 = 75;

/// Paddle height in cells.
pub const PADDLE_HEIGHT: u16 = 4;

/// Paddle width in cells.
pub const PADDLE_WIDTH: u16 = 1;

/// Glyph used for both paddles (full block).
pub const PADDLE_GLYPH: char = '\u{2588}';

/// Glyph used for the ball.
pub const BALL_GLYPH: char = '\u{25CF}';

/// Ball velocity at kickoff: one row down, one column right per tick.
pub const BALL_START_VELOCITY: Velocity = Velocity::new(1, 1);

/// Smallest playable field. Anything smaller cannot fit two paddles and a ball.
pub const MIN_FIELD_WIDTH: u16 = 8;
pub const MIN_FIELD_HEIGHT: u16 = PADDLE_HEIGHT + 2;

/// Play-field dimensions in cells, fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    pub width: u16,
    pub height: u16,
}

impl Field {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// True if `row` lies within `[0, height)`.
    pub fn contains_row(&self, row: i32) -> bool {
        row >= 0 && row < self.height as i32
    }
}

/// Per-tick displacement in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Velocity {
    pub row: i32,
    pub col: i32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity::new(0, 0);

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn is_zero(&self) -> bool {
        self.row == 0 && self.col == 0
    }

    /// Negate the row component.
    pub fn flip_row(self) -> Self {
        Self::new(-self.row, self.col)
    }

    /// Negate the column component.
    pub fn flip_col(self) -> Self {
        Self::new(self.row, -self.col)
    }
}

/// The two human players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Left paddle.
    One,
    /// Right paddle.
    Two,
}

/// Edge of the field a paddle is checked against before moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    Top,
    Bottom,
}

/// Outcome of applying input: keep running or stop the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

impl Control {
    pub fn is_quit(&self) -> bool {
        matches!(self, Control::Quit)
    }
}

/// Game actions produced by key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move the left paddle one row up
    Player1Up,
    /// Move the left paddle one row down
    Player1Down,
    /// Move the right paddle one row up
    Player2Up,
    /// Move the right paddle one row down
    Player2Down,
    /// Toggle pause state
    Pause,
    /// Stop the game loop
    Quit,
}

impl GameAction {
    /// The paddle and edge a movement action targets, if it is one.
    pub fn player_move(&self) -> Option<(Player, Boundary)> {
        match self {
            GameAction::Player1Up => Some((Player::One, Boundary::Top)),
            GameAction::Player1Down => Some((Player::One, Boundary::Bottom)),
            GameAction::Player2Up => Some((Player::Two, Boundary::Top)),
            GameAction::Player2Down => Some((Player::Two, Boundary::Bottom)),
            GameAction::Pause | GameAction::Quit => None,
        }
    }
}
