//! Per-frame render state.
//!
//! A [`GameSnapshot`] is a plain copy of everything a backend needs to draw one
//! frame. Building it never allocates.

use core::fmt::Write;

use arrayvec::{ArrayString, ArrayVec};

use crate::camera::CameraFrame;
use crate::screen::MenuOption;
use crate::types::*;

/// HUD values, ready for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    pub score: u32,
    pub lives: u8,
    pub level: u8,
    pub timer: u32,
    /// Countdown as two zero-padded digits, e.g. "07".
    pub timer_text: ArrayString<10>,
    pub health: f32,
    /// Health in [0, 1].
    pub health_fraction: f32,
    pub coins_collected: u8,
}

impl Hud {
    pub fn new(
        score: u32,
        lives: u8,
        level: u8,
        timer: u32,
        health: f32,
        coins_collected: u8,
    ) -> Self {
        let mut timer_text = ArrayString::new();
        // Any u32 fits in 10 digits.
        let _ = write!(timer_text, "{:02}", timer);
        Self {
            score,
            lives,
            level,
            timer,
            timer_text,
            health,
            health_fraction: (health / MAX_HEALTH).clamp(0.0, 1.0),
            coins_collected,
        }
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new(0, MAX_LIVES, 1, level_timer(1), MAX_HEALTH, 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSnapshot {
    pub cell: GridPos,
    pub facing: Direction,
    /// World-space centre including the jump offset and elevator ride.
    pub world: Vec3,
    pub jumping: bool,
    pub on_elevator: bool,
    pub horizontal_offset: f32,
    pub vertical_offset: f32,
    pub stride: u8,
}

/// Per-frame render state.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub screen: Screen,
    pub paused: bool,
    pub seed: u32,
    /// Options of the current screen and the highlighted one.
    pub options: &'static [MenuOption],
    pub selection: usize,
    /// Loading bar fill in [0, 1].
    pub loading_progress: f32,
    pub hud: Hud,
    pub player: PlayerSnapshot,
    pub holes: ArrayVec<GridPos, MAX_HAZARDS>,
    pub elevator_tiles: ArrayVec<GridPos, MAX_HAZARDS>,
    pub fires: ArrayVec<GridPos, MAX_HAZARDS>,
    /// Live coins; retired slots are `None` and not drawn.
    pub coins: [Option<GridPos>; COIN_COUNT],
    pub elevator_height: f32,
    pub camera: CameraFrame,
    pub end_reason: Option<EndReason>,
    pub score_revealed: bool,
}

impl GameSnapshot {
    /// Whether gameplay is advancing right now.
    pub fn playable(&self) -> bool {
        self.screen == Screen::Play && !self.paused
    }

    /// The highlighted option, if the screen has any.
    pub fn selected_option(&self) -> Option<MenuOption> {
        self.options.get(self.selection).copied()
    }
}
