//! Elevator tile mechanics.
//!
//! Every elevator tile shares one height that bounces between -0.5 and +0.5.
//! The height is kept as an integer step count so the bounds are hit exactly.

use crate::types::{
    DROP_TOLERANCE, ELEVATOR_AMPLITUDE_STEPS, ELEVATOR_STEP, FINAL_LEVEL, LANDING_TOLERANCE,
};

/// Shared oscillation state of all elevator tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elevator {
    steps: i32,
    rising: bool,
}

/// Outcome of the player touching an elevator tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// The tile top is above the player's feet.
    Blocked,
    /// Safe, but the drop onto the tile hurts.
    Hard,
    Safe,
}

impl Elevator {
    pub fn new() -> Self {
        Self {
            steps: 0,
            rising: true,
        }
    }

    /// Current height in world units, within [-0.5, 0.5].
    pub fn height(&self) -> f32 {
        self.steps as f32 * ELEVATOR_STEP
    }

    pub fn rising(&self) -> bool {
        self.rising
    }

    /// Advance one tick. The direction flips when a bound has been reached.
    pub fn step(&mut self) {
        if self.steps >= ELEVATOR_AMPLITUDE_STEPS {
            self.rising = false;
        } else if self.steps <= -ELEVATOR_AMPLITUDE_STEPS {
            self.rising = true;
        }
        self.steps += if self.rising { 1 } else { -1 };
        self.steps = self
            .steps
            .clamp(-ELEVATOR_AMPLITUDE_STEPS, ELEVATOR_AMPLITUDE_STEPS);
    }

    /// Advance only on the level that has elevators.
    pub fn tick(&mut self, level: u8) {
        if level == FINAL_LEVEL {
            self.step();
        }
    }

    /// Set the height in whole steps (clamped). Intended for scripted setups.
    pub fn set_steps(&mut self, steps: i32, rising: bool) {
        self.steps = steps.clamp(-ELEVATOR_AMPLITUDE_STEPS, ELEVATOR_AMPLITUDE_STEPS);
        self.rising = rising;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether feet at `vertical_offset` clear the tile top.
    pub fn is_safe_landing(&self, vertical_offset: f32) -> bool {
        self.height() <= vertical_offset + LANDING_TOLERANCE
    }

    /// Classify a landing from `vertical_offset` onto a tile.
    pub fn landing(&self, vertical_offset: f32) -> Landing {
        if !self.is_safe_landing(vertical_offset) {
            Landing::Blocked
        } else if vertical_offset - self.height() >= DROP_TOLERANCE {
            Landing::Hard
        } else {
            Landing::Safe
        }
    }
}

impl Default for Elevator {
    fn default() -> Self {
        Self::new()
    }
}
