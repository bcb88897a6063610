//! Terminal input module (engine-facing).
//!
//! This module is independent of any renderer. It maps `crossterm` key events
//! into [`crate::types::GameAction`] and runs a background listener that hands
//! keys to the fixed-rate game loop through a capacity-one channel.

pub mod listener;
pub mod map;

pub use tui_pong_types as types;

pub use listener::{terminal_keys, InputSource};
pub use map::{handle_key_event, key_name, should_quit};
