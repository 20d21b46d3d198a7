//! Play screen handlers: input while playing and the per-tick simulation.
//!
//! Tick order:
//!
//! 1. queued auto-advance step, helicopter orbit, elevator oscillation
//! 2. jump advance (may land two cells ahead)
//! 3. fatal check (off-grid, hole, no health)
//! 4. elevator contact and the airborne check on the cell ahead
//! 5. level-advance rule on the exit cell
//! 6. coin pickup (at most one per tick), fire drain
//! 7. real-time countdown and hazard reshuffle
//! 8. end conditions

use crate::elevator::Landing;
use crate::grid::Hazards;
use crate::player::StepOutcome;
use crate::progression::Advance;
use crate::session::{GameSession, Pointer};
use crate::types::*;

impl GameSession {
    pub(crate) fn play_action(&mut self, action: GameAction) -> (bool, Option<Screen>) {
        let applied = match action {
            GameAction::Move(dir) => self.walk(dir),
            GameAction::Face(dir) => self.player.face(dir),
            GameAction::Jump => self.player.start_jump(),
            GameAction::ToggleView(mode) => {
                self.camera.toggle(mode);
                log::debug!("view toggled: {} active={}", mode.as_str(), self.camera.active_mode().as_str());
                true
            }
            GameAction::Turn(turn) => {
                self.camera.press_turn(turn);
                true
            }
            GameAction::TurnRelease => {
                self.camera.release_turn();
                true
            }
            GameAction::StrideUp => self.player.stride_up(),
            GameAction::StrideDown => self.player.stride_down(),
            GameAction::PointerMoved {
                x,
                y,
                width,
                height,
            } => self.steer(Pointer {
                x,
                y,
                width,
                height,
            }),
            GameAction::PointerClick => self.walk(self.player.facing),
            GameAction::Activate | GameAction::Back | GameAction::Pause | GameAction::Quit => false,
        };
        (applied, None)
    }

    /// Step one cell. Walking into a raised elevator tile costs health and
    /// leaves the player where they stood.
    fn walk(&mut self, dir: Direction) -> bool {
        match self.player.step(dir, &self.hazards, &self.elevator) {
            StepOutcome::Moved => true,
            StepOutcome::Bounced => {
                log::debug!("bounced off raised elevator heading {}", dir.as_str());
                self.bump();
                true
            }
            StepOutcome::Locked => false,
        }
    }

    /// Face the way the pointer moved; horizontal motion wins ties.
    fn steer(&mut self, next: Pointer) -> bool {
        let Some(prev) = self.pointer.replace(next) else {
            return false;
        };
        let dx = next.x - prev.x;
        let dy = next.y - prev.y;
        let dir = if dx == 0.0 && dy == 0.0 {
            return false;
        } else if dx.abs() >= dy.abs() {
            if dx > 0.0 {
                Direction::East
            } else {
                Direction::West
            }
        } else if dy > 0.0 {
            Direction::South
        } else {
            Direction::North
        };
        self.player.face(dir)
    }

    pub(crate) fn tick_play(&mut self, elapsed_ms: u32) -> Option<Screen> {
        let level = self.progress.level();

        self.player.auto_advance();
        self.camera.step();
        self.elevator.tick(level);
        self.player.advance_jump();

        self.check_fall();
        self.resolve_elevator();

        let on_exit = self.player.pos.index() == Some(EXIT_INDEX);
        match self.progress.try_advance(on_exit) {
            Advance::Stay => {}
            Advance::NextLevel(level) => {
                self.player.respawn();
                self.elevator.reset();
                self.hazards = Hazards::for_level(level, SPAWN, &mut self.rng);
                self.timer_clock.reset();
                self.reseed_clock.reset();
                self.push_event(GameEvent::LevelCleared { level });
                log::info!("level cleared: now level {} score={}", level, self.progress.score());
            }
            Advance::Completed => {
                self.push_event(GameEvent::LevelCleared {
                    level: COMPLETION_LEVEL,
                });
                return self.finish(EndReason::Completed);
            }
        }

        let pos = self.player.pos;
        if let Some(slot) = self.hazards.coin_at(pos) {
            self.hazards.retire_coin(slot);
            self.progress.collect_coin(slot);
            self.push_event(GameEvent::CoinCollected { slot: slot as u8 });
            log::debug!(
                "coin {} collected: score={} credit={}",
                slot,
                self.progress.score(),
                self.progress.coins_collected()
            );
        }
        if self.hazards.is_fire(pos) {
            self.progress.burn();
        }

        let seconds = self.timer_clock.advance(elapsed_ms);
        self.progress.count_down(seconds);
        if self.reseed_clock.advance(elapsed_ms) > 0 {
            self.hazards
                .reshuffle(self.progress.level(), self.player.pos, &mut self.rng);
        }

        let reason = self.progress.end_reason()?;
        self.finish(reason)
    }

    fn finish(&mut self, reason: EndReason) -> Option<Screen> {
        self.end_reason = Some(reason);
        self.push_event(GameEvent::SessionEnded(reason));
        Some(Screen::End)
    }

    /// Off-grid, hole or no health: lose a life and start over at spawn.
    fn check_fall(&mut self) {
        let pos = self.player.pos;
        if pos.in_bounds() && !self.hazards.is_hole(pos) && !self.progress.is_dead() {
            return;
        }
        self.progress.fall();
        self.player.respawn();
        self.push_event(GameEvent::Fell);
        log::debug!(
            "fell at ({}, {}): lives={}",
            pos.x,
            pos.z,
            self.progress.lives()
        );
    }

    fn resolve_elevator(&mut self) {
        let pos = self.player.pos;
        if !self.hazards.is_elevator(pos) {
            self.player.on_elevator = false;
        } else if !self.player.on_elevator {
            match self.elevator.landing(self.player.vertical_offset()) {
                Landing::Blocked => {
                    self.bump();
                    self.player.push_back();
                }
                Landing::Hard => {
                    self.bump();
                    self.player.on_elevator = true;
                }
                Landing::Safe => self.player.on_elevator = true,
            }
        }

        // Airborne towards a tile standing above the feet.
        if self.player.jumping() && !self.player.on_elevator {
            let ahead = self.player.pos.step(self.player.facing, 1);
            if self.hazards.is_elevator(ahead)
                && !self.elevator.is_safe_landing(self.player.vertical_offset())
            {
                self.bump();
                self.player.cancel_jump();
            }
        }
    }

    fn bump(&mut self) {
        self.progress.damage(ELEVATOR_PENALTY);
        self.push_event(GameEvent::ElevatorBump);
        log::debug!("elevator bump: health={}", self.progress.health());
    }
}
