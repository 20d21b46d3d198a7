//! Held-key tracking for the helicopter turn keys.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::types::{GameAction, Turn};

/// Tracks which turn key is held.
#[derive(Debug, Clone)]
pub struct InputHandler {
    held: Option<Turn>,
    last_key_time: Instant,
    key_release_timeout_ms: u32,
}

// Longer than the usual auto-repeat delay, so a key held in a terminal
// without release events stays held between its repeated presses.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 700;

fn turn_for(code: KeyCode) -> Option<Turn> {
    match code {
        KeyCode::Char('4') => Some(Turn::Left),
        KeyCode::Char('6') => Some(Turn::Right),
        _ => None,
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: None,
            last_key_time: Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn held(&self) -> Option<Turn> {
        self.held
    }

    /// A key went down (or auto-repeated). Only the first press of a turn key
    /// produces an action; repeats just keep it held.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let turn = turn_for(code)?;
        self.last_key_time = Instant::now();
        if self.held == Some(turn) {
            None
        } else {
            self.held = Some(turn);
            Some(GameAction::Turn(turn))
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<GameAction> {
        let turn = turn_for(code)?;
        if self.held == Some(turn) {
            self.held = None;
            Some(GameAction::TurnRelease)
        } else {
            None
        }
    }

    /// Auto-release when the terminal does not emit release events.
    pub fn update(&mut self) -> Option<GameAction> {
        if self.held.is_none() {
            return None;
        }
        let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
        if self.last_key_time.elapsed() > timeout {
            self.held = None;
            Some(GameAction::TurnRelease)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.held = None;
        self.last_key_time = Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
