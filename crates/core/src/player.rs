//! Player motion & jump physics.
//!
//! The player lives on a grid cell and only gains a continuous sub-tile
//! offset while jumping. A jump runs on fixed per-tick steps of in-jump time
//! `t` and, when it ends, carries the player two cells along the facing
//! direction.

use crate::elevator::Elevator;
use crate::grid::Hazards;
use crate::types::*;

/// Horizontal jump offset at in-jump time `t`.
pub fn horizontal_offset_at(t: f32) -> f32 {
    JUMP_HORIZONTAL_RATE * t
}

/// Vertical jump offset at in-jump time `t` (a parabola peaking at t = 1).
pub fn vertical_offset_at(t: f32) -> f32 {
    JUMP_LIFT * t - JUMP_GRAVITY * t * t
}

/// Result of a single-cell step request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    /// The destination was an elevator tile standing too high; the move was undone.
    Bounced,
    /// Direction is locked while jumping.
    Locked,
}

/// Player position, facing and jump state.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: GridPos,
    pub facing: Direction,
    pub on_elevator: bool,
    jumping: bool,
    /// Completed jump steps; in-jump time is `jump_steps * JUMP_STEP`.
    jump_steps: u32,
    horizontal_offset: f32,
    vertical_offset: f32,
    stride: u8,
    queued_steps: u8,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: SPAWN,
            facing: Direction::North,
            on_elevator: false,
            jumping: false,
            jump_steps: 0,
            horizontal_offset: 0.0,
            vertical_offset: 0.0,
            stride: 0,
            queued_steps: 0,
        }
    }

    pub fn jumping(&self) -> bool {
        self.jumping
    }

    /// Elapsed in-jump time (0 when grounded).
    pub fn jump_elapsed(&self) -> f32 {
        self.jump_steps as f32 * JUMP_STEP
    }

    pub fn horizontal_offset(&self) -> f32 {
        self.horizontal_offset
    }

    pub fn vertical_offset(&self) -> f32 {
        self.vertical_offset
    }

    pub fn stride(&self) -> u8 {
        self.stride
    }

    pub fn queued_steps(&self) -> u8 {
        self.queued_steps
    }

    /// Back to the spawn cell with the jump and any queued steps dropped.
    pub fn respawn(&mut self) {
        self.pos = SPAWN;
        self.on_elevator = false;
        self.queued_steps = 0;
        self.cancel_jump();
    }

    /// Full reset for a new game.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Change facing without moving. Ignored mid-jump.
    pub fn face(&mut self, dir: Direction) -> bool {
        if self.jumping {
            return false;
        }
        self.facing = dir;
        true
    }

    /// Face `dir` and step one cell.
    ///
    /// Stepping onto an elevator tile whose top is above the player's feet
    /// bounces the player back to where they stood (unless already riding).
    pub fn step(&mut self, dir: Direction, hazards: &Hazards, elevator: &Elevator) -> StepOutcome {
        if self.jumping {
            return StepOutcome::Locked;
        }
        self.facing = dir;

        let dest = self.pos.step(dir, 1);
        if hazards.is_elevator(dest)
            && !self.on_elevator
            && !elevator.is_safe_landing(self.vertical_offset)
        {
            return StepOutcome::Bounced;
        }

        self.pos = dest;
        StepOutcome::Moved
    }

    /// Start a jump. Returns false if already airborne.
    pub fn start_jump(&mut self) -> bool {
        if self.jumping {
            return false;
        }
        self.jumping = true;
        self.jump_steps = 0;
        true
    }

    /// Abort a jump in place (no cell advance).
    pub fn cancel_jump(&mut self) {
        self.jumping = false;
        self.jump_steps = 0;
        self.horizontal_offset = 0.0;
        self.vertical_offset = 0.0;
    }

    /// Advance the jump by one tick. Returns true on the tick the player lands.
    pub fn advance_jump(&mut self) -> bool {
        if !self.jumping {
            return false;
        }

        let t = self.jump_elapsed();
        self.horizontal_offset = horizontal_offset_at(t);
        self.vertical_offset = vertical_offset_at(t);
        self.jump_steps += 1;

        if self.jump_steps >= JUMP_STEPS {
            self.pos = self.pos.step(self.facing, JUMP_CELLS);
            self.cancel_jump();
            return true;
        }
        false
    }

    /// Raise the stride and queue that many automatic steps.
    pub fn stride_up(&mut self) -> bool {
        if self.stride >= MAX_STRIDE {
            return false;
        }
        self.stride += 1;
        self.queued_steps = self.stride;
        true
    }

    /// Lower the stride (never below 1) and queue that many automatic steps.
    pub fn stride_down(&mut self) -> bool {
        if self.stride <= 1 {
            return false;
        }
        self.stride -= 1;
        self.queued_steps = self.stride;
        true
    }

    /// Take one queued automatic step along the facing direction.
    ///
    /// Unlike [`Player::step`] there is no bounce check; landing on a tile
    /// is resolved by the elevator contact rules afterwards.
    pub fn auto_advance(&mut self) -> bool {
        if self.queued_steps == 0 || self.jumping {
            return false;
        }
        self.pos = self.pos.step(self.facing, 1);
        self.queued_steps -= 1;
        true
    }

    /// Push the player one cell back against the facing direction.
    pub fn push_back(&mut self) {
        self.pos = self.pos.step(self.facing.opposite(), 1);
    }

    /// Height of the player's centre, riding the elevator when on one.
    pub fn elevation(&self, elevator_height: f32) -> f32 {
        let ride = if self.on_elevator { elevator_height } else { 0.0 };
        PLAYER_BASE_HEIGHT + self.vertical_offset + ride
    }

    /// World-space centre, including the in-flight jump offset.
    pub fn world_position(&self, elevator_height: f32) -> Vec3 {
        let mut x = self.pos.world_x();
        let mut z = self.pos.world_z();
        let h = self.horizontal_offset;
        match self.facing {
            Direction::North => z -= h,
            Direction::South => z += h,
            Direction::West => x -= h,
            Direction::East => x += h,
        }
        Vec3::new(x, self.elevation(elevator_height), z)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
