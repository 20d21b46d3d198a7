//! Screen flow building blocks: the options each screen offers and the
//! pointer hit regions that highlight them.
//!
//! Regions are laid out on a 600 x 600 reference surface and scaled to
//! whatever surface the pointer reports.

use crate::types::{Screen, REFERENCE_SURFACE};

/// A selectable option on a menu-like screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    NewGame,
    Controls,
    Quit,
    Back,
    Menu,
}

impl MenuOption {
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::NewGame => "New Game",
            MenuOption::Controls => "Controls",
            MenuOption::Quit => "Quit",
            MenuOption::Back => "Back",
            MenuOption::Menu => "Menu",
        }
    }
}

/// An axis-aligned rectangle in reference units (inclusive bounds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub x0: f32,
    pub x1: f32,
    pub y0: f32,
    pub y1: f32,
}

impl HitRegion {
    pub const fn new(x0: f32, x1: f32, y0: f32, y1: f32) -> Self {
        Self { x0, x1, y0, y1 }
    }

    /// Whether a pointer at `(x, y)` on a `width` x `height` surface falls inside.
    pub fn contains(&self, x: f32, y: f32, width: f32, height: f32) -> bool {
        if width <= 0.0 || height <= 0.0 {
            return false;
        }
        let rx = x / width * REFERENCE_SURFACE;
        let ry = y / height * REFERENCE_SURFACE;
        (self.x0..=self.x1).contains(&rx) && (self.y0..=self.y1).contains(&ry)
    }
}

const MENU_REGIONS: [(MenuOption, HitRegion); 3] = [
    (MenuOption::NewGame, HitRegion::new(215.0, 365.0, 270.0, 305.0)),
    (MenuOption::Controls, HitRegion::new(215.0, 365.0, 345.0, 380.0)),
    (MenuOption::Quit, HitRegion::new(215.0, 365.0, 420.0, 455.0)),
];

const CONTROLS_REGIONS: [(MenuOption, HitRegion); 1] =
    [(MenuOption::Back, HitRegion::new(20.0, 95.0, 20.0, 45.0))];

const END_REGIONS: [(MenuOption, HitRegion); 2] = [
    (MenuOption::Menu, HitRegion::new(215.0, 365.0, 270.0, 305.0)),
    (MenuOption::Quit, HitRegion::new(215.0, 365.0, 345.0, 380.0)),
];

/// Hovering here on the End screen reveals the final score.
pub const SCORE_REVEAL_REGION: HitRegion = HitRegion::new(265.0, 315.0, 130.0, 150.0);

const MENU_OPTIONS: [MenuOption; 3] = [MenuOption::NewGame, MenuOption::Controls, MenuOption::Quit];
const CONTROLS_OPTIONS: [MenuOption; 1] = [MenuOption::Back];
const END_OPTIONS: [MenuOption; 2] = [MenuOption::Menu, MenuOption::Quit];

/// Options offered by `screen`, top to bottom.
pub fn options(screen: Screen) -> &'static [MenuOption] {
    match screen {
        Screen::Menu => &MENU_OPTIONS,
        Screen::Controls => &CONTROLS_OPTIONS,
        Screen::End => &END_OPTIONS,
        Screen::Loading | Screen::Play => &[],
    }
}

/// Hit regions of `screen`, paired with their options.
pub fn regions(screen: Screen) -> &'static [(MenuOption, HitRegion)] {
    match screen {
        Screen::Menu => &MENU_REGIONS,
        Screen::Controls => &CONTROLS_REGIONS,
        Screen::End => &END_REGIONS,
        Screen::Loading | Screen::Play => &[],
    }
}

/// Index of the option under the pointer, if any.
pub fn option_at(screen: Screen, x: f32, y: f32, width: f32, height: f32) -> Option<usize> {
    regions(screen)
        .iter()
        .position(|(_, r)| r.contains(x, y, width, height))
}

/// Move a highlight by `delta`, wrapping around `len` options.
pub fn wrap_selection(current: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as i32;
    (current as i32 + delta).rem_euclid(len) as usize
}
