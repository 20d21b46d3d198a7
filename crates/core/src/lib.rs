//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the whole gameplay simulation and the screen-flow state
//! machine. It has **no dependencies** on terminals, windows or I/O:
//!
//! - **Deterministic**: Same seed produces the same hazard and coin placement
//! - **Testable**: Every rule is exercised by unit tests next to the code
//! - **Allocation-free ticks**: Hazard sets and event buffers are fixed-capacity
//!
//! # Module Structure
//!
//! - [`grid`]: hazard and coin placement on the 10x10 grid
//! - [`player`]: grid motion, stride and jump physics
//! - [`elevator`]: the shared oscillating elevator height and landing rules
//! - [`progression`]: lives, health, score, countdown and level advance
//! - [`camera`]: view toggles and eye/target/up derivation
//! - [`screen`]: menu options and pointer hit regions
//! - [`session`]: the [`GameSession`] aggregate and per-screen handlers
//! - [`snapshot`]: per-frame render state
//! - [`hooks`]: the [`ScreenHooks`] backend seam
//!
//! # Game Rules
//!
//! - **Levels**: three levels with 15 / 30 / 45 second countdowns
//! - **Coins**: five per level; the exit cell (9, 0) opens once five coins of
//!   completion credit are collected
//! - **Hazards**: holes on every level, fire from level 2, elevator tiles on level 3
//! - **Falls**: stepping off the grid, into a hole or running out of health
//!   costs a life and restarts at the spawn cell (0, 9)
//! - **Jump**: a fixed-step arc that lands two cells ahead
//!
//! # Example
//!
//! ```
//! use gravity_core::GameSession;
//! use gravity_types::{Direction, GameAction, Screen, LOADING_MS};
//!
//! let mut session = GameSession::new(12345);
//! session.apply_action(GameAction::Activate); // "New Game"
//! session.tick(LOADING_MS);
//! assert_eq!(session.screen(), Screen::Play);
//!
//! session.apply_action(GameAction::Face(Direction::East));
//! session.apply_action(GameAction::Jump);
//! session.tick(16);
//! assert!(session.player.jumping());
//! ```
//!
//! # Timing
//!
//! Call [`GameSession::tick`] every frame with the elapsed real time. The
//! countdown, hazard reshuffles and the loading screen run on real time; the
//! jump, elevator and helicopter orbit advance a fixed step per tick.

pub mod camera;
pub mod clock;
pub mod elevator;
pub mod grid;
pub mod hooks;
mod play;
pub mod player;
pub mod progression;
pub mod rng;
pub mod screen;
pub mod session;
pub mod snapshot;

pub use gravity_types as types;

// Re-export commonly used types for convenience
pub use camera::{CameraFrame, CameraRig, ViewToggles};
pub use clock::Interval;
pub use elevator::{Elevator, Landing};
pub use grid::Hazards;
pub use hooks::{present, ScreenHooks};
pub use player::{Player, StepOutcome};
pub use progression::{Advance, Progress};
pub use rng::SimpleRng;
pub use screen::{HitRegion, MenuOption};
pub use session::GameSession;
pub use snapshot::{GameSnapshot, Hud, PlayerSnapshot};
