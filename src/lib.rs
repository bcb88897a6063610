//! TUI Pong (workspace facade crate).
//!
//! Re-exports the `tui_pong::{core,input,term,types}` API from the crates under
//! `crates/` and adds the pieces the binary wires together: environment
//! configuration, log setup and the per-frame driver.

pub mod config;
pub mod frame;
pub mod logging;

pub use tui_pong_core as core;
pub use tui_pong_input as input;
pub use tui_pong_term as term;
pub use tui_pong_types as types;

pub use config::GameConfig;
pub use frame::Frame;
