//! Camera view selector.
//!
//! Five independent toggles pick the view; when several are set the first in
//! priority order wins (Tower > Top > Follow > Helicopter > Adventure), and
//! with none set the default overhead view is used.

use crate::player::Player;
use crate::types::*;

/// Eye/target/up triple handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub mode: ViewMode,
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl CameraFrame {
    fn looking(mode: ViewMode, eye: Vec3, target: Vec3) -> Self {
        Self {
            mode,
            eye,
            target,
            up: Vec3::UP,
        }
    }
}

/// The five view toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewToggles {
    pub tower: bool,
    pub top: bool,
    pub follow: bool,
    pub helicopter: bool,
    pub adventure: bool,
}

impl ViewToggles {
    pub fn any(&self) -> bool {
        self.tower || self.top || self.follow || self.helicopter || self.adventure
    }
}

/// View toggles plus the helicopter orbit state.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    toggles: ViewToggles,
    orbit_deg: f32,
    turn: Option<Turn>,
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            toggles: ViewToggles::default(),
            orbit_deg: ORBIT_START_DEG,
            turn: None,
        }
    }

    pub fn toggles(&self) -> ViewToggles {
        self.toggles
    }

    pub fn orbit_deg(&self) -> f32 {
        self.orbit_deg
    }

    pub fn turning(&self) -> Option<Turn> {
        self.turn
    }

    /// Flip one toggle. `Default` clears them all.
    pub fn toggle(&mut self, mode: ViewMode) {
        let t = &mut self.toggles;
        match mode {
            ViewMode::Default => self.clear(),
            ViewMode::Tower => t.tower = !t.tower,
            ViewMode::Top => t.top = !t.top,
            ViewMode::Follow => t.follow = !t.follow,
            ViewMode::Helicopter => t.helicopter = !t.helicopter,
            ViewMode::Adventure => t.adventure = !t.adventure,
        }
    }

    /// A turn key went down: helicopter on, orbit restarts from 90 degrees.
    pub fn press_turn(&mut self, turn: Turn) {
        self.toggles.helicopter = true;
        self.orbit_deg = ORBIT_START_DEG;
        self.turn = Some(turn);
    }

    /// The turn key came up: helicopter off.
    pub fn release_turn(&mut self) {
        self.toggles.helicopter = false;
        self.turn = None;
    }

    /// Per-tick orbit advance while a turn key is held.
    pub fn step(&mut self) {
        match self.turn {
            Some(Turn::Left) => self.orbit_deg -= ORBIT_STEP_DEG,
            Some(Turn::Right) => self.orbit_deg += ORBIT_STEP_DEG,
            None => {}
        }
    }

    /// Drop every toggle and any held turn.
    pub fn clear(&mut self) {
        self.toggles = ViewToggles::default();
        self.turn = None;
    }

    /// The authoritative mode for this tick.
    pub fn active_mode(&self) -> ViewMode {
        let t = &self.toggles;
        if t.tower {
            ViewMode::Tower
        } else if t.top {
            ViewMode::Top
        } else if t.follow {
            ViewMode::Follow
        } else if t.helicopter {
            ViewMode::Helicopter
        } else if t.adventure {
            ViewMode::Adventure
        } else {
            ViewMode::Default
        }
    }

    /// Derive the camera for the active mode.
    pub fn frame(&self, player: &Player, elevator_height: f32) -> CameraFrame {
        let mode = self.active_mode();
        match mode {
            ViewMode::Default => {
                CameraFrame::looking(mode, Vec3::new(0.5, 2.0, 7.0), Vec3::ZERO)
            }
            ViewMode::Tower => CameraFrame::looking(mode, Vec3::new(0.0, 10.0, 10.0), Vec3::ZERO),
            ViewMode::Top => CameraFrame {
                mode,
                eye: Vec3::new(0.0, 10.0, 0.0),
                target: Vec3::new(0.0, 0.0, 3.0),
                up: Vec3::new(0.0, -1.0, 0.0),
            },
            ViewMode::Follow => {
                let p = player.world_position(elevator_height);
                CameraFrame::looking(mode, Vec3::new(p.x, 5.0, 7.0 + p.z), p)
            }
            ViewMode::Helicopter => {
                let a = self.orbit_deg.to_radians();
                let eye = Vec3::new(
                    a.sin() * HELICOPTER_RADIUS,
                    HELICOPTER_HEIGHT,
                    a.cos() * HELICOPTER_RADIUS,
                );
                CameraFrame::looking(mode, eye, Vec3::ZERO)
            }
            ViewMode::Adventure => {
                let p = player.world_position(elevator_height);
                let eye = Vec3::new(p.x, p.y + 1.0, p.z - 2.0);
                let mut target = Vec3::new(p.x, p.y, p.z - 2.0);
                match player.facing {
                    Direction::North => target.z = p.z - ADVENTURE_LOOKAHEAD,
                    Direction::South => target.z = p.z + ADVENTURE_LOOKAHEAD,
                    Direction::West => target.x = p.x - ADVENTURE_LOOKAHEAD,
                    Direction::East => target.x = p.x + ADVENTURE_LOOKAHEAD,
                }
                CameraFrame::looking(mode, eye, target)
            }
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}
