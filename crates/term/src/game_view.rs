//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Menu-like screens place their options at the same proportional positions
//! as the pointer hit regions, so a mouse click on a drawn label lands in the
//! region that activates it.

use crate::core::screen::{self, HitRegion, MenuOption, SCORE_REVEAL_REGION};
use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::*;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Column of a reference-space x coordinate.
    pub fn col(&self, x: f32) -> u16 {
        (x / REFERENCE_SURFACE * self.width as f32) as u16
    }

    /// Row of a reference-space y coordinate.
    pub fn row(&self, y: f32) -> u16 {
        (y / REFERENCE_SURFACE * self.height as f32) as u16
    }
}

const BLACK: Rgb = Rgb::new(0, 0, 0);
const TILE_BG: Rgb = Rgb::new(40, 44, 52);

const TEXT: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), BLACK);
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), BLACK).bold();
const TITLE: CellStyle = CellStyle::new(Rgb::new(120, 200, 255), BLACK).bold();
const HINT: CellStyle = CellStyle::new(Rgb::new(150, 150, 150), BLACK).dim();
const HIGHLIGHT: CellStyle = CellStyle::new(BLACK, Rgb::new(240, 200, 80)).bold();
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BLACK);

/// A lightweight terminal renderer for every screen.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(TEXT.into_cell(' '));

        match snap.screen {
            Screen::Menu => self.draw_menu(fb, snap, viewport),
            Screen::Controls => self.draw_controls(fb, snap, viewport),
            Screen::Loading => self.draw_loading(fb, snap, viewport),
            Screen::Play => self.draw_play(fb, snap, viewport),
            Screen::End => self.draw_end(fb, snap, viewport),
        }

        if snap.paused {
            let y = viewport.height.saturating_sub(1);
            fb.put_str_centered(y, " PAUSED (p to resume) ", HIGHLIGHT);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_options(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        for (i, (option, region)) in screen::regions(snap.screen).iter().enumerate() {
            let selected = i == snap.selection;
            draw_option(fb, viewport, *option, region, selected);
        }
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        fb.put_str_centered(viewport.row(150.0), "G R A V I T Y", TITLE);
        fb.put_str_centered(viewport.row(190.0), "collect the coins, mind the gaps", HINT);
        self.draw_options(fb, snap, viewport);
        fb.put_str_centered(
            viewport.row(520.0),
            "↑/↓ select · Enter confirm · mouse works too",
            HINT,
        );
    }

    fn draw_controls(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        self.draw_options(fb, snap, viewport);

        const LINES: [(&str, &str); 12] = [
            ("arrows", "step one cell"),
            ("w a s d", "face without stepping"),
            ("space", "jump two cells"),
            ("f / g", "longer / shorter stride"),
            ("mouse", "steer, left click steps"),
            ("right click", "jump"),
            ("7 / 9", "tower / top view"),
            ("1 / 3", "follow / adventure view"),
            ("4 / 6 (hold)", "helicopter orbit"),
            ("p", "pause"),
            ("backspace", "back"),
            ("q / esc", "quit"),
        ];

        let top = viewport.row(120.0);
        let x = viewport.width.saturating_sub(40) / 2;
        fb.put_str(x, top, "CONTROLS", TITLE);
        for (i, (key, what)) in LINES.iter().enumerate() {
            let y = top + 2 + i as u16;
            if y >= viewport.height {
                break;
            }
            fb.put_str(x, y, key, LABEL);
            fb.put_str(x + 15, y, what, TEXT);
        }
    }

    fn draw_loading(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let y = viewport.height / 2;
        fb.put_str_centered(y.saturating_sub(2), "Loading...", TITLE);
        let w = (viewport.width / 2).max(10);
        let x = viewport.width.saturating_sub(w) / 2;
        let full = CellStyle::new(Rgb::new(120, 200, 255), BLACK);
        fb.bar(x, y, w, snap.loading_progress, full, HINT);
    }

    fn draw_end(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let headline = match snap.end_reason {
            Some(EndReason::Completed) => "ALL LEVELS CLEARED",
            Some(EndReason::TimeUp) => "TIME UP",
            Some(EndReason::OutOfLives) => "OUT OF LIVES",
            None => "GAME OVER",
        };
        fb.put_str_centered(viewport.row(80.0), headline, TITLE);

        let region = SCORE_REVEAL_REGION;
        let y = viewport.row((region.y0 + region.y1) / 2.0);
        if snap.score_revealed {
            let x = viewport.col(region.x0);
            let x = fb.put_str(x, y, "Score ", LABEL);
            fb.put_u32(x, y, snap.hud.score, HIGHLIGHT);
        } else {
            fb.put_str(viewport.col(region.x0), y, "Score ???", HINT);
        }
        fb.put_str_centered(y + 1, "(hover to reveal)", HINT);

        self.draw_options(fb, snap, viewport);
    }

    fn draw_play(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let grid = GRID_SIZE as u16;
        let frame_w = grid * self.cell_w + 2;
        let frame_h = grid + 2;
        let panel_w = 26;

        let total_w = frame_w + 2 + panel_w;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        fb.draw_box(start_x, start_y, frame_w, frame_h, BORDER);

        for z in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let pos = GridPos::new(x, z);
                let (glyph, style) = tile_glyph(snap, pos);
                let px = start_x + 1 + x as u16 * self.cell_w;
                let py = start_y + 1 + z as u16;
                fb.fill_rect(px, py, self.cell_w, 1, ' ', style);
                fb.put_str(px, py, glyph, style);
            }
        }

        let p = &snap.player;
        if p.cell.in_bounds() {
            let px = start_x + 1 + p.cell.x as u16 * self.cell_w;
            let py = start_y + 1 + p.cell.z as u16;
            let arrow = match p.facing {
                Direction::North => "@^",
                Direction::South => "@v",
                Direction::East => "@>",
                Direction::West => "<@",
            };
            let fg = if p.jumping {
                Rgb::new(255, 120, 255)
            } else {
                Rgb::new(255, 255, 255)
            };
            fb.put_str(px, py, arrow, CellStyle::new(fg, TILE_BG).bold());
        }

        self.draw_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, x: u16, top: u16) {
        if x.saturating_add(12) > viewport.width {
            return;
        }
        let hud = &snap.hud;
        let mut y = top;
        let mut row = |fb: &mut FrameBuffer, label: &str| {
            let at = y;
            fb.put_str(x, at, label, LABEL);
            y = y.saturating_add(1);
            at
        };

        let at = row(fb, "SCORE");
        fb.put_u32(x + 8, at, hud.score, TEXT);

        let at = row(fb, "LIVES");
        for i in 0..MAX_LIVES as u16 {
            let heart = if i < hud.lives as u16 {
                CellStyle::new(Rgb::new(230, 60, 60), BLACK)
            } else {
                HINT
            };
            fb.put_char(x + 8 + i * 2, at, '♥', heart);
        }

        let at = row(fb, "LEVEL");
        fb.put_u32(x + 8, at, hud.level as u32, TEXT);

        let at = row(fb, "TIME");
        let time_style = if hud.timer <= 5 {
            CellStyle::new(Rgb::new(255, 90, 90), BLACK).bold()
        } else {
            TEXT
        };
        fb.put_str(x + 8, at, &hud.timer_text, time_style);

        let at = row(fb, "HEALTH");
        let health = CellStyle::new(Rgb::new(90, 220, 110), BLACK);
        fb.bar(x + 8, at, 10, hud.health_fraction, health, HINT);

        let at = row(fb, "COINS");
        let cx = fb.put_u32(x + 8, at, hud.coins_collected as u32, TEXT);
        let cx = fb.put_str(cx, at, "/", TEXT);
        fb.put_u32(cx, at, COINS_TO_CLEAR as u32, TEXT);

        let at = row(fb, "STRIDE");
        fb.put_u32(x + 8, at, snap.player.stride as u32, TEXT);

        let at = row(fb, "VIEW");
        fb.put_str(x + 8, at, snap.camera.mode.as_str(), TEXT);

        let at = row(fb, "EYE");
        let eye = snap.camera.eye;
        let mut cx = x + 8;
        for v in [eye.x, eye.y, eye.z] {
            cx = fb.put_f32(cx, at, v, HINT) + 1;
        }

        let at = row(fb, "LIFT");
        fb.put_f32(x + 8, at, snap.elevator_height, TEXT);

        row(fb, "");
        let at = row(fb, "");
        fb.put_str(x, at, "@ you  () coin  [] exit", HINT);
        let at = row(fb, "");
        fb.put_str(x, at, "^^ fire  == lift  .. hole", HINT);
    }
}

fn draw_option(fb: &mut FrameBuffer, viewport: Viewport, option: MenuOption, region: &HitRegion, selected: bool) {
    let y = viewport.row((region.y0 + region.y1) / 2.0);
    let label = option.label();
    let len = label.chars().count() as u16 + 4;
    let centre = viewport.col((region.x0 + region.x1) / 2.0);
    let x = centre.saturating_sub(len / 2).max(viewport.col(region.x0));
    if selected {
        let x = fb.put_str(x, y, "> ", HIGHLIGHT);
        let x = fb.put_str(x, y, label, HIGHLIGHT);
        fb.put_str(x, y, " <", HIGHLIGHT);
    } else {
        let x = fb.put_str(x, y, "  ", TEXT);
        fb.put_str(x, y, label, TEXT);
    }
}

/// Two-column glyph and style for one grid cell.
fn tile_glyph(snap: &GameSnapshot, pos: GridPos) -> (&'static str, CellStyle) {
    let on = |fg: Rgb| CellStyle::new(fg, TILE_BG);
    if snap.holes.contains(&pos) {
        return ("..", CellStyle::new(Rgb::new(70, 70, 70), BLACK));
    }
    if snap.coins.contains(&Some(pos)) {
        return ("()", on(Rgb::new(250, 210, 60)).bold());
    }
    if snap.fires.contains(&pos) {
        return ("^^", on(Rgb::new(255, 110, 40)).bold());
    }
    if snap.elevator_tiles.contains(&pos) {
        let glyph = if snap.elevator_height > 0.0 {
            "▲▲"
        } else if snap.elevator_height < 0.0 {
            "▼▼"
        } else {
            "=="
        };
        return (glyph, on(Rgb::new(90, 200, 230)));
    }
    if pos.index() == Some(EXIT_INDEX) {
        return ("[]", on(Rgb::new(90, 220, 110)).bold());
    }
    ("  ", on(Rgb::new(90, 90, 100)))
}
