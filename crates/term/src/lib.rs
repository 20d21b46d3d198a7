//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It avoids widget toolkits
//! and instead renders into a simple framebuffer that is diffed and flushed to
//! the terminal.
//!
//! - [`game_view`]: pure snapshot-to-framebuffer drawing for every screen
//! - [`renderer`]: terminal session and diffed output
//! - [`backend`]: the [`ScreenHooks`](crate::core::ScreenHooks) implementation

pub mod backend;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use gravity_core as core;
pub use gravity_types as types;

pub use backend::TerminalBackend;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
