//! Core types module - shared data structures and tuning constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be
//! shared by the simulation core, the input mapper and the terminal backend.
//!
//! # Grid
//!
//! The play field is a 10x10 grid of tiles addressed either by coordinates
//! `(x, z)` or by a flat grid index `z * 10 + x`:
//!
//! - **Spawn cell**: (0, 9), index 90
//! - **Exit cell**: (9, 0), index 9
//!
//! # Timing
//!
//! Two kinds of clocks drive the game:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default simulation tick interval (~60 FPS) |
//! | `TIMER_INTERVAL_MS` | 1000 | Real time per countdown second |
//! | `RESEED_INTERVAL_MS` | 5000 | Real time between hazard reshuffles |
//! | `LOADING_MS` | 3000 | Real time spent on the loading screen |
//!
//! Jumps, the elevator and the helicopter orbit advance by fixed per-tick
//! steps instead, so their kinematics are coupled to the tick rate.
//!
//! # Examples
//!
//! ```
//! use gravity_types::{Direction, GameAction, GridPos, EXIT_INDEX, SPAWN};
//!
//! assert_eq!(SPAWN.index(), Some(90));
//! assert_eq!(GridPos::from_index(EXIT_INDEX), GridPos::new(9, 0));
//!
//! let north = SPAWN.step(Direction::North, 1);
//! assert_eq!(north, GridPos::new(0, 8));
//!
//! assert_eq!(GameAction::from_str("jump"), Some(GameAction::Jump));
//! assert_eq!(Direction::East.opposite(), Direction::West);
//! ```

/// Grid side length in cells.
pub const GRID_SIZE: i8 = 10;

/// Number of addressable cells.
pub const CELL_COUNT: u8 = 100;

/// Where the player appears on a new game, after a fall and after a level clear.
pub const SPAWN: GridPos = GridPos { x: 0, z: 9 };

/// Grid index of the exit cell that completes a level.
pub const EXIT_INDEX: u8 = 9;

/// Lives at the start of a game.
pub const MAX_LIVES: u8 = 3;

/// Full health.
pub const MAX_HEALTH: f32 = 15.0;

/// Number of coin slots per level.
pub const COIN_COUNT: usize = 5;

/// Score per collected coin.
pub const COIN_SCORE: u32 = 10;

/// Level-completion credit per coin slot.
///
/// Slot 2 earns nothing and slot 3 earns double; the weights still sum to
/// [`COINS_TO_CLEAR`], so four physical coins can clear a level.
pub const COIN_COMPLETION_WEIGHTS: [u8; COIN_COUNT] = [1, 1, 0, 2, 1];

/// Completion credit required at the exit cell.
pub const COINS_TO_CLEAR: u8 = 5;

/// Capacity of each hazard set (holes, elevator tiles, fires).
pub const MAX_HAZARDS: usize = 5;

/// Health lost per tick while standing in fire.
pub const FIRE_DRAIN: f32 = 0.1;

/// Health lost on a bad elevator landing.
pub const ELEVATOR_PENALTY: f32 = 5.0;

/// Elevator height change per tick (world units).
pub const ELEVATOR_STEP: f32 = 0.01;

/// Elevator travel bound in steps; the height stays within +/- 0.5.
pub const ELEVATOR_AMPLITUDE_STEPS: i32 = 50;

/// Allowed overlap between the elevator top and the player's feet when landing.
pub const LANDING_TOLERANCE: f32 = 0.0;

/// Settling onto a tile at least this far below the feet hurts.
pub const DROP_TOLERANCE: f32 = 0.25;

/// In-jump time advanced per tick.
pub const JUMP_STEP: f32 = 0.1;

/// Ticks in a jump; the player lands on the tick `t` reaches `JUMP_STEPS * JUMP_STEP` (2.1).
pub const JUMP_STEPS: u32 = 21;

/// Cells covered by a completed jump.
pub const JUMP_CELLS: i8 = 2;

/// Horizontal jump offset per unit of in-jump time.
pub const JUMP_HORIZONTAL_RATE: f32 = 0.6;

/// Linear term of the jump arc.
pub const JUMP_LIFT: f32 = 0.4;

/// Quadratic term of the jump arc.
pub const JUMP_GRAVITY: f32 = 0.2;

/// Countdown seconds at the start of levels 1, 2 and 3.
pub const LEVEL_TIMERS: [u32; 3] = [15, 30, 45];

/// Highest playable level.
pub const FINAL_LEVEL: u8 = 3;

/// Level value that means every level was cleared.
pub const COMPLETION_LEVEL: u8 = 4;

/// Maximum queued auto-advance steps.
pub const MAX_STRIDE: u8 = 3;

/// Substitute hole index when a rolled hole lands on the player or the spawn cell.
pub const HOLE_FALLBACK_INDEX: u8 = 37;

/// Substitute fire cell when a rolled fire lands on the player.
pub const FIRE_FALLBACK: GridPos = GridPos { x: 8, z: 7 };

/// Default simulation tick interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Real time per countdown second.
pub const TIMER_INTERVAL_MS: u32 = 1000;

/// Real time between hazard reshuffles.
pub const RESEED_INTERVAL_MS: u32 = 5000;

/// Real time spent on the loading screen.
pub const LOADING_MS: u32 = 3000;

/// World distance between neighbouring cell centres.
pub const CELL_SPACING: f32 = 0.6;

/// World x of column 0.
pub const GRID_ORIGIN_X: f32 = -3.0;

/// Height of the player's centre above a flat tile.
pub const PLAYER_BASE_HEIGHT: f32 = 0.5;

/// Helicopter orbit radius.
pub const HELICOPTER_RADIUS: f32 = 10.0;

/// Helicopter eye height.
pub const HELICOPTER_HEIGHT: f32 = 2.0;

/// Orbit angle change per tick while a turn key is held (degrees).
pub const ORBIT_STEP_DEG: f32 = 0.5;

/// Orbit angle applied when a turn key is pressed (degrees).
pub const ORBIT_START_DEG: f32 = 90.0;

/// How far ahead of the player the adventure camera looks.
pub const ADVENTURE_LOOKAHEAD: f32 = 5.0;

/// Width and height of the reference surface used by pointer hit regions.
pub const REFERENCE_SURFACE: f32 = 600.0;

/// Starting countdown for a level (levels outside 1..=3 use the last entry).
pub fn level_timer(level: u8) -> u32 {
    let idx = (level.max(1) as usize - 1).min(LEVEL_TIMERS.len() - 1);
    LEVEL_TIMERS[idx]
}


/// A cell coordinate. Values outside 0..=9 are representable on purpose:
/// stepping off the grid is a game event, not a type error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: i8,
    pub z: i8,
}

impl GridPos {
    pub const fn new(x: i8, z: i8) -> Self {
        Self { x, z }
    }

    /// Build from a grid index (`z * 10 + x`).
    ///
    /// ```
    /// use gravity_types::GridPos;
    ///
    /// assert_eq!(GridPos::from_index(37), GridPos::new(7, 3));
    /// ```
    pub fn from_index(index: u8) -> Self {
        Self {
            x: (index % GRID_SIZE as u8) as i8,
            z: (index / GRID_SIZE as u8) as i8,
        }
    }

    pub fn in_bounds(&self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.z)
    }

    /// Grid index, or `None` when off the grid.
    pub fn index(&self) -> Option<u8> {
        if self.in_bounds() {
            Some((self.z * GRID_SIZE + self.x) as u8)
        } else {
            None
        }
    }

    /// The cell `cells` steps away in `dir`. No bounds checking.
    pub fn step(&self, dir: Direction, cells: i8) -> Self {
        let (dx, dz) = dir.delta();
        Self {
            x: self.x.saturating_add(dx.saturating_mul(cells)),
            z: self.z.saturating_add(dz.saturating_mul(cells)),
        }
    }

    /// World-space x of the cell centre.
    pub fn world_x(&self) -> f32 {
        GRID_ORIGIN_X + CELL_SPACING * self.x as f32
    }

    /// World-space z of the cell centre.
    pub fn world_z(&self) -> f32 {
        CELL_SPACING * self.z as f32
    }
}

/// Movement / facing direction on the grid.
///
/// North decreases `z` (away from the default camera), South increases it,
/// West decreases `x` and East increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Cell delta `(dx, dz)` for one step.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "south" | "s", "east" | "e", "west" | "w"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Direction::North),
            "south" | "s" => Some(Direction::South),
            "east" | "e" => Some(Direction::East),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Menu,
    Controls,
    Loading,
    Play,
    End,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Menu => "menu",
            Screen::Controls => "controls",
            Screen::Loading => "loading",
            Screen::Play => "play",
            Screen::End => "end",
        }
    }
}

/// Camera view modes. `Default` is the overhead view used when no toggle is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewMode {
    Default,
    Tower,
    Top,
    Follow,
    Helicopter,
    Adventure,
}

impl ViewMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(ViewMode::Default),
            "tower" => Some(ViewMode::Tower),
            "top" => Some(ViewMode::Top),
            "follow" => Some(ViewMode::Follow),
            "helicopter" => Some(ViewMode::Helicopter),
            "adventure" => Some(ViewMode::Adventure),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Default => "default",
            ViewMode::Tower => "tower",
            ViewMode::Top => "top",
            ViewMode::Follow => "follow",
            ViewMode::Helicopter => "helicopter",
            ViewMode::Adventure => "adventure",
        }
    }
}

/// Which way the helicopter orbit turns while a turn key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Angle decreases.
    Left,
    /// Angle increases.
    Right,
}

/// Logical input actions, already decoupled from physical keys and buttons.
///
/// The same action means different things per screen; e.g. `Move(North)`
/// moves the menu highlight up on the menu and steps the player in Play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameAction {
    /// Face and step one cell (menu: move highlight).
    Move(Direction),
    /// Face without stepping.
    Face(Direction),
    /// Start a jump along the facing direction.
    Jump,
    /// Confirm the highlighted option.
    Activate,
    /// Leave the controls screen.
    Back,
    /// Toggle the pause flag.
    Pause,
    /// Flip one camera toggle (helicopter is driven by `Turn`).
    ToggleView(ViewMode),
    /// Hold a helicopter turn key.
    Turn(Turn),
    /// Release the helicopter turn key.
    TurnRelease,
    /// Raise the stride (queued auto-advance steps).
    StrideUp,
    /// Lower the stride.
    StrideDown,
    /// Pointer position on a surface of the given size.
    PointerMoved {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// Primary pointer click (menu: activate, play: step forward).
    PointerClick,
    /// Terminate the process.
    Quit,
}

impl GameAction {
    /// Parse action from string (for scripted trace runs)
    ///
    /// Pointer actions carry coordinates and cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity_types::{Direction, GameAction, ViewMode};
    ///
    /// assert_eq!(GameAction::from_str("move-north"), Some(GameAction::Move(Direction::North)));
    /// assert_eq!(GameAction::from_str("face-e"), Some(GameAction::Face(Direction::East)));
    /// assert_eq!(GameAction::from_str("view-top"), Some(GameAction::ToggleView(ViewMode::Top)));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if let Some(dir) = s.strip_prefix("move-") {
            return Direction::from_str(dir).map(GameAction::Move);
        }
        if let Some(dir) = s.strip_prefix("face-") {
            return Direction::from_str(dir).map(GameAction::Face);
        }
        if let Some(mode) = s.strip_prefix("view-") {
            return match ViewMode::from_str(mode)? {
                ViewMode::Default | ViewMode::Helicopter => None,
                mode => Some(GameAction::ToggleView(mode)),
            };
        }
        match s.as_str() {
            "jump" => Some(GameAction::Jump),
            "activate" => Some(GameAction::Activate),
            "back" => Some(GameAction::Back),
            "pause" => Some(GameAction::Pause),
            "turn-left" => Some(GameAction::Turn(Turn::Left)),
            "turn-right" => Some(GameAction::Turn(Turn::Right)),
            "turn-release" => Some(GameAction::TurnRelease),
            "stride-up" => Some(GameAction::StrideUp),
            "stride-down" => Some(GameAction::StrideDown),
            "click" => Some(GameAction::PointerClick),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Short name used in logs and trace output.
    pub fn name(&self) -> &'static str {
        match self {
            GameAction::Move(_) => "move",
            GameAction::Face(_) => "face",
            GameAction::Jump => "jump",
            GameAction::Activate => "activate",
            GameAction::Back => "back",
            GameAction::Pause => "pause",
            GameAction::ToggleView(_) => "view",
            GameAction::Turn(_) => "turn",
            GameAction::TurnRelease => "turn-release",
            GameAction::StrideUp => "stride-up",
            GameAction::StrideDown => "stride-down",
            GameAction::PointerMoved { .. } => "pointer",
            GameAction::PointerClick => "click",
            GameAction::Quit => "quit",
        }
    }
}

/// Why a play session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    OutOfLives,
    TimeUp,
    Completed,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::OutOfLives => "out_of_lives",
            EndReason::TimeUp => "time_up",
            EndReason::Completed => "completed",
        }
    }
}

/// Things that happened during a tick, drained by observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A coin slot was collected.
    CoinCollected { slot: u8 },
    /// The player fell (hole, off-grid or no health) and respawned.
    Fell,
    /// A bad elevator landing cost health.
    ElevatorBump,
    /// A level was cleared; carries the new level.
    LevelCleared { level: u8 },
    /// Play ended.
    SessionEnded(EndReason),
    /// A screen was entered.
    ScreenEntered(Screen),
}

/// A world-space vector (x right, y up, z towards the default camera).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}
