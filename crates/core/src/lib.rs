//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminal I/O or threads, making it:
//!
//! - **Deterministic**: the same inputs always produce the same positions
//! - **Testable**: every rule can be exercised without a terminal
//! - **Portable**: any render sink can draw a [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`game_object`]: paddles and ball as rectangles with a velocity
//! - [`game_state`]: the three objects, the pause flag, input handling and the tick
//! - [`snapshot`]: read-only per-frame copy handed to renderers
//!
//! # Game Rules
//!
//! - Paddles move one row per key press and never leave the field
//! - The ball moves by its velocity every tick
//! - A ball about to cross a paddle column within the paddle's rows bounces horizontally
//! - A ball about to leave the top or bottom edge bounces vertically
//! - Bounces only flip velocity; positions are never clamped
//!
//! # Example
//!
//! ```
//! use tui_pong_core::GameState;
//! use tui_pong_types::{Control, Field, GameAction};
//!
//! let mut game = GameState::new(Field::new(40, 20));
//! let start = game.player1().row();
//!
//! assert_eq!(game.handle_user_input(Some(GameAction::Player1Up)), Control::Continue);
//! assert_eq!(game.player1().row(), start - 1);
//!
//! let ball_col = game.ball().col();
//! game.update_state();
//! assert_eq!(game.ball().col(), ball_col + 1);
//!
//! assert_eq!(game.handle_user_input(Some(GameAction::Quit)), Control::Quit);
//! ```

pub mod game_object;
pub mod game_state;
pub mod snapshot;

pub use tui_pong_types as types;

pub use game_object::{GameObject, ObjectKind};
pub use game_state::GameState;
pub use snapshot::GameSnapshot;
