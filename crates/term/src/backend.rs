//! Terminal implementation of the screen hooks.

use anyhow::Result;

use crate::core::{GameSnapshot, ScreenHooks};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;
use crate::types::Screen;

/// Draws each frame with [`GameView`] and flushes it through a [`TerminalRenderer`].
pub struct TerminalBackend {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalBackend {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn enter_terminal(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit_terminal(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// The terminal changed size; redraw everything next frame.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        log::debug!("terminal resized to {}x{}", cols, rows);
        self.renderer.invalidate();
    }
}

impl Default for TerminalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenHooks for TerminalBackend {
    type Error = anyhow::Error;

    fn enter(&mut self, screen: Screen) -> Result<()> {
        log::info!("screen: {}", screen.as_str());
        self.renderer.invalidate();
        Ok(())
    }

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view
            .render_into(snapshot, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
