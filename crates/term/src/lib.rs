//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. The game view
//! paints into any [`RenderSink`]; the terminal-backed sink keeps a framebuffer
//! and flushes only changed cells through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Let views be tested against an in-memory framebuffer
//! - Keep terminal I/O behind one type that restores the terminal on exit

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;
pub mod sink;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use fb::{FrameBuffer, BLANK};
pub use game_view::GameView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::Screen;
pub use sink::RenderSink;
