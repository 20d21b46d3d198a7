//! Game session - the single owned aggregate driven by the screen flow
//!
//! Each screen has its own action and tick handler; handlers return the
//! next screen (if any) and [`GameSession::enter`] applies the one-time entry
//! effects. The Play handlers live in [`crate::play`].

use arrayvec::ArrayVec;

use crate::camera::CameraRig;
use crate::clock::Interval;
use crate::elevator::Elevator;
use crate::grid::Hazards;
use crate::player::Player;
use crate::progression::Progress;
use crate::rng::SimpleRng;
use crate::screen::{self, MenuOption, SCORE_REVEAL_REGION};
use crate::snapshot::{GameSnapshot, Hud, PlayerSnapshot};
use crate::types::*;

/// Capacity of the per-tick event buffer.
pub const MAX_EVENTS: usize = 16;

/// Last reported pointer position and surface size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Pointer {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession {
    screen: Screen,
    paused: bool,
    seed: u32,
    pub(crate) rng: SimpleRng,
    pub progress: Progress,
    pub player: Player,
    pub hazards: Hazards,
    pub elevator: Elevator,
    pub camera: CameraRig,
    pub(crate) timer_clock: Interval,
    pub(crate) reseed_clock: Interval,
    loading_ms: u32,
    selection: usize,
    pub(crate) pointer: Option<Pointer>,
    score_revealed: bool,
    pub(crate) end_reason: Option<EndReason>,
    quit: bool,
    /// Screen entered but not yet announced to the backend.
    entered: Option<Screen>,
    events: ArrayVec<GameEvent, MAX_EVENTS>,
}

impl GameSession {
    /// Create a session on the menu screen with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let hazards = Hazards::for_level(1, SPAWN, &mut rng);
        Self {
            screen: Screen::Menu,
            paused: false,
            seed,
            rng,
            progress: Progress::new(),
            player: Player::new(),
            hazards,
            elevator: Elevator::new(),
            camera: CameraRig::new(),
            timer_clock: Interval::new(TIMER_INTERVAL_MS),
            reseed_clock: Interval::new(RESEED_INTERVAL_MS),
            loading_ms: 0,
            selection: 0,
            pointer: None,
            score_revealed: false,
            end_reason: None,
            quit: false,
            entered: Some(Screen::Menu),
            events: ArrayVec::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn score_revealed(&self) -> bool {
        self.score_revealed
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Loading bar fill in [0, 1].
    pub fn loading_progress(&self) -> f32 {
        (self.loading_ms as f32 / LOADING_MS as f32).min(1.0)
    }

    /// Reset everything to level-1 defaults ("New Game").
    pub fn new_game(&mut self) {
        self.progress = Progress::new();
        self.player.reset();
        self.elevator.reset();
        self.camera.clear();
        self.hazards = Hazards::for_level(1, SPAWN, &mut self.rng);
        self.timer_clock.reset();
        self.reseed_clock.reset();
        self.end_reason = None;
        self.score_revealed = false;
        self.paused = false;
        log::info!("new game: seed={} rng_state={}", self.seed, self.rng.state());
    }

    /// Switch screens, running the entry effects once per change.
    pub fn enter(&mut self, next: Screen) {
        if next == self.screen {
            return;
        }
        log::debug!("screen {} -> {}", self.screen.as_str(), next.as_str());
        let from = self.screen;
        self.screen = next;
        self.selection = 0;

        match next {
            Screen::Menu => {
                if from == Screen::End {
                    self.progress.rewind();
                }
            }
            Screen::Loading => self.loading_ms = 0,
            Screen::End => {
                self.progress.refill_lives();
                self.progress.restore_health();
                self.camera.clear();
                self.elevator.reset();
                self.player.cancel_jump();
                self.player.on_elevator = false;
                self.score_revealed = false;
                if let Some(reason) = self.end_reason {
                    log::info!(
                        "session ended: reason={} score={} level={}",
                        reason.as_str(),
                        self.progress.score(),
                        self.progress.level()
                    );
                }
            }
            // Steering works on pointer deltas; start fresh.
            Screen::Play => self.pointer = None,
            Screen::Controls => {}
        }

        self.entered = Some(next);
        self.push_event(GameEvent::ScreenEntered(next));
    }

    /// Apply an input action to the current screen.
    ///
    /// Returns true if the action had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Quit => {
                self.quit = true;
                return true;
            }
            GameAction::Pause => {
                self.paused = !self.paused;
                log::debug!("paused={}", self.paused);
                return true;
            }
            _ => {}
        }

        let (applied, next) = match self.screen {
            Screen::Menu | Screen::Controls | Screen::End => self.menu_action(action),
            Screen::Loading => (false, None),
            Screen::Play => {
                if self.paused {
                    (false, None)
                } else {
                    self.play_action(action)
                }
            }
        };

        if let Some(next) = next {
            self.enter(next);
        }
        applied
    }

    /// Advance the session by `elapsed_ms` of real time.
    ///
    /// Returns true if the screen changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused {
            return false;
        }
        let next = match self.screen {
            Screen::Loading => self.tick_loading(elapsed_ms),
            Screen::Play => self.tick_play(elapsed_ms),
            Screen::Menu | Screen::Controls | Screen::End => None,
        };
        match next {
            Some(next) => {
                self.enter(next);
                true
            }
            None => false,
        }
    }

    fn tick_loading(&mut self, elapsed_ms: u32) -> Option<Screen> {
        self.loading_ms = self.loading_ms.saturating_add(elapsed_ms);
        (self.loading_ms >= LOADING_MS).then_some(Screen::Play)
    }

    /// Shared handler for the option screens (Menu, Controls, End).
    fn menu_action(&mut self, action: GameAction) -> (bool, Option<Screen>) {
        let options = screen::options(self.screen);
        match action {
            GameAction::Move(Direction::North) => {
                self.selection = screen::wrap_selection(self.selection, -1, options.len());
                (true, None)
            }
            GameAction::Move(Direction::South) => {
                self.selection = screen::wrap_selection(self.selection, 1, options.len());
                (true, None)
            }
            GameAction::Activate => match options.get(self.selection) {
                Some(&option) => (true, self.activate(option)),
                None => (false, None),
            },
            GameAction::Back if self.screen == Screen::Controls => (true, Some(Screen::Menu)),
            GameAction::PointerMoved {
                x,
                y,
                width,
                height,
            } => {
                self.pointer = Some(Pointer {
                    x,
                    y,
                    width,
                    height,
                });
                if let Some(i) = screen::option_at(self.screen, x, y, width, height) {
                    self.selection = i;
                }
                if self.screen == Screen::End {
                    self.score_revealed = SCORE_REVEAL_REGION.contains(x, y, width, height);
                }
                (true, None)
            }
            GameAction::PointerClick => {
                let hit = self
                    .pointer
                    .and_then(|p| screen::option_at(self.screen, p.x, p.y, p.width, p.height));
                match hit.and_then(|i| Some((i, *options.get(i)?))) {
                    Some((i, option)) => {
                        self.selection = i;
                        (true, self.activate(option))
                    }
                    None => (false, None),
                }
            }
            _ => (false, None),
        }
    }

    fn activate(&mut self, option: MenuOption) -> Option<Screen> {
        match option {
            MenuOption::NewGame => {
                self.new_game();
                Some(Screen::Loading)
            }
            MenuOption::Controls => Some(Screen::Controls),
            MenuOption::Back | MenuOption::Menu => Some(Screen::Menu),
            MenuOption::Quit => {
                self.quit = true;
                None
            }
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        // Full buffer: the oldest undrained events win.
        let _ = self.events.try_push(event);
    }

    /// Take and clear the events produced since the last call.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, MAX_EVENTS> {
        core::mem::take(&mut self.events)
    }

    /// Take the pending screen-entry notification, if any.
    pub fn take_entered(&mut self) -> Option<Screen> {
        self.entered.take()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let p = &self.progress;
        let h = self.elevator.height();
        GameSnapshot {
            screen: self.screen,
            paused: self.paused,
            seed: self.seed,
            options: screen::options(self.screen),
            selection: self.selection,
            loading_progress: self.loading_progress(),
            hud: Hud::new(
                p.score(),
                p.lives(),
                p.level(),
                p.timer(),
                p.health(),
                p.coins_collected(),
            ),
            player: PlayerSnapshot {
                cell: self.player.pos,
                facing: self.player.facing,
                world: self.player.world_position(h),
                jumping: self.player.jumping(),
                on_elevator: self.player.on_elevator,
                horizontal_offset: self.player.horizontal_offset(),
                vertical_offset: self.player.vertical_offset(),
                stride: self.player.stride(),
            },
            holes: self.hazards.holes().iter().map(|&i| GridPos::from_index(i)).collect(),
            elevator_tiles: self
                .hazards
                .elevator_tiles()
                .iter()
                .map(|&i| GridPos::from_index(i))
                .collect(),
            fires: self.hazards.fires().iter().copied().collect(),
            coins: *self.hazards.coins(),
            elevator_height: h,
            camera: self.camera.frame(&self.player, h),
            end_reason: self.end_reason,
            score_revealed: self.score_revealed,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
