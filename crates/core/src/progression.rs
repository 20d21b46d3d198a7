//! Progression & scoring: lives, health, score, the level countdown and the
//! level-advance rule.

use crate::types::*;

/// Bookkeeping for one play session.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    level: u8,
    lives: u8,
    health: f32,
    score: u32,
    coins_collected: u8,
    timer: u32,
}

/// Result of checking the exit cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Not on the exit, or not enough coin credit yet.
    Stay,
    /// Moved on to the given level (2 or 3).
    NextLevel(u8),
    /// The final level was cleared.
    Completed,
}

impl Progress {
    /// Level-1 defaults.
    pub fn new() -> Self {
        Self {
            level: 1,
            lives: MAX_LIVES,
            health: MAX_HEALTH,
            score: 0,
            coins_collected: 0,
            timer: level_timer(1),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    /// Health in [0, 1] for a health bar.
    pub fn health_fraction(&self) -> f32 {
        self.health / MAX_HEALTH
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn coins_collected(&self) -> u8 {
        self.coins_collected
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// Lose health, clamped at zero.
    pub fn damage(&mut self, amount: f32) {
        self.health = (self.health - amount).clamp(0.0, MAX_HEALTH);
    }

    pub fn restore_health(&mut self) {
        self.health = MAX_HEALTH;
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// A fall: one life gone and health restored.
    pub fn fall(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.restore_health();
    }

    /// Reset lives to full (done when a session ends and when returning to the menu).
    pub fn refill_lives(&mut self) {
        self.lives = MAX_LIVES;
    }

    /// Award a coin from `slot`. Completion credit follows the per-slot
    /// weights; score always grows by [`COIN_SCORE`].
    pub fn collect_coin(&mut self, slot: usize) {
        self.score += COIN_SCORE;
        let credit = COIN_COMPLETION_WEIGHTS.get(slot).copied().unwrap_or(0);
        self.coins_collected = self.coins_collected.saturating_add(credit);
    }

    /// Apply one tick of fire contact.
    pub fn burn(&mut self) {
        self.damage(FIRE_DRAIN);
    }

    /// Count the timer down by `seconds`, saturating at zero.
    pub fn count_down(&mut self, seconds: u32) {
        self.timer = self.timer.saturating_sub(seconds);
    }

    pub fn time_up(&self) -> bool {
        self.timer == 0
    }

    /// Level-advance rule: on the exit cell with full coin credit.
    pub fn try_advance(&mut self, on_exit: bool) -> Advance {
        if !on_exit || self.coins_collected != COINS_TO_CLEAR {
            return Advance::Stay;
        }

        self.level += 1;
        self.coins_collected = 0;
        if self.level >= COMPLETION_LEVEL {
            self.level = COMPLETION_LEVEL;
            return Advance::Completed;
        }
        self.timer = level_timer(self.level);
        Advance::NextLevel(self.level)
    }

    /// Why play should stop now, if it should.
    pub fn end_reason(&self) -> Option<EndReason> {
        if self.lives == 0 {
            Some(EndReason::OutOfLives)
        } else if self.level >= COMPLETION_LEVEL {
            Some(EndReason::Completed)
        } else if self.time_up() {
            Some(EndReason::TimeUp)
        } else {
            None
        }
    }

    /// Back to the first level with full lives (End -> Menu).
    pub fn rewind(&mut self) {
        self.level = 1;
        self.lives = MAX_LIVES;
    }

    /// Set the countdown directly. Intended for scripted setups.
    pub fn set_timer(&mut self, seconds: u32) {
        self.timer = seconds;
    }

    /// Jump straight to a level with its starting countdown. Intended for scripted setups.
    pub fn set_level(&mut self, level: u8) {
        self.level = level.clamp(1, COMPLETION_LEVEL);
        self.timer = level_timer(self.level);
        self.coins_collected = 0;
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}
