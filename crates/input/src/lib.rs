//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`] and
//! tracks the held helicopter turn keys, including on terminals without
//! key-release events.

pub mod handler;
pub mod map;

pub use gravity_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, handle_mouse_event, should_quit};
