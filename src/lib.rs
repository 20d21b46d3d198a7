//! Gravity (workspace facade crate).
//!
//! Re-exports the dedicated crates under `crates/` as
//! `gravity::{core,input,term,types}` and hosts the binary's configuration,
//! logging and headless trace support.

pub use gravity_core as core;
pub use gravity_input as input;
pub use gravity_term as term;
pub use gravity_types as types;

pub mod config;
pub mod logging;
pub mod trace;
