//! The seam between the session and a rendering backend.

use crate::session::GameSession;
use crate::snapshot::GameSnapshot;
use crate::types::Screen;

/// Screen lifecycle callbacks implemented by a rendering backend.
pub trait ScreenHooks {
    type Error;

    /// Called once per screen change, before the first render of that screen.
    fn enter(&mut self, screen: Screen) -> Result<(), Self::Error>;

    /// Called every frame.
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), Self::Error>;
}

/// Deliver a pending enter notification (if any), then render one frame.
pub fn present<H: ScreenHooks>(session: &mut GameSession, hooks: &mut H) -> Result<(), H::Error> {
    if let Some(screen) = session.take_entered() {
        hooks.enter(screen)?;
    }
    hooks.render(&session.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameAction, LOADING_MS};

    #[derive(Default)]
    struct Recorder {
        entered: Vec<Screen>,
        frames: usize,
    }

    impl ScreenHooks for Recorder {
        type Error = std::convert::Infallible;

        fn enter(&mut self, screen: Screen) -> Result<(), Self::Error> {
            self.entered.push(screen);
            Ok(())
        }

        fn render(&mut self, _snapshot: &GameSnapshot) -> Result<(), Self::Error> {
            self.frames += 1;
            Ok(())
        }
    }

    #[test]
    fn test_enter_fires_once_per_screen_change() {
        let mut s = GameSession::new(1);
        let mut r = Recorder::default();

        present(&mut s, &mut r).unwrap();
        present(&mut s, &mut r).unwrap();
        assert_eq!(r.entered, vec![Screen::Menu]);

        s.apply_action(GameAction::Activate);
        present(&mut s, &mut r).unwrap();
        s.tick(LOADING_MS);
        present(&mut s, &mut r).unwrap();
        present(&mut s, &mut r).unwrap();

        assert_eq!(r.entered, vec![Screen::Menu, Screen::Loading, Screen::Play]);
        assert_eq!(r.frames, 5);
    }

    struct Failing;

    impl ScreenHooks for Failing {
        type Error = &'static str;

        fn enter(&mut self, _screen: Screen) -> Result<(), Self::Error> {
            Err("no terminal")
        }

        fn render(&mut self, _snapshot: &GameSnapshot) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_backend_errors_propagate() {
        let mut s = GameSession::new(1);
        assert_eq!(present(&mut s, &mut Failing), Err("no terminal"));
    }
}
