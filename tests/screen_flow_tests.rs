//! Screen flow, pause and backend hook behaviour.

use std::convert::Infallible;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use gravity::core::screen::MenuOption;
use gravity::core::{present, GameSession, GameSnapshot, ScreenHooks};
use gravity::input::{handle_key_event, InputHandler};
use gravity::types::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Feed a key press through the same mapping the runner uses.
fn press(session: &mut GameSession, code: KeyCode) -> bool {
    let action = handle_key_event(key(code)).expect("mapped key");
    session.apply_action(action)
}

fn pointer(x: f32, y: f32) -> GameAction {
    GameAction::PointerMoved {
        x,
        y,
        width: 600.0,
        height: 600.0,
    }
}

#[derive(Default)]
struct Recorder {
    entered: Vec<Screen>,
    rendered: Vec<Screen>,
}

impl ScreenHooks for Recorder {
    type Error = Infallible;

    fn enter(&mut self, screen: Screen) -> Result<(), Infallible> {
        self.entered.push(screen);
        Ok(())
    }

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), Infallible> {
        self.rendered.push(snapshot.screen);
        Ok(())
    }
}

#[test]
fn test_menu_to_play_through_loading() {
    let mut session = GameSession::new(1);
    assert_eq!(session.screen(), Screen::Menu);
    assert_eq!(session.snapshot().selected_option(), Some(MenuOption::NewGame));

    press(&mut session, KeyCode::Enter);
    assert_eq!(session.screen(), Screen::Loading);

    session.tick(LOADING_MS / 2);
    assert_eq!(session.screen(), Screen::Loading);
    assert!((session.loading_progress() - 0.5).abs() < 1e-6);

    // Moves are ignored while loading.
    assert!(!session.apply_action(GameAction::Move(Direction::North)));

    session.tick(LOADING_MS / 2);
    assert_eq!(session.screen(), Screen::Play);
    assert_eq!(session.player.pos, SPAWN);
}

#[test]
fn test_controls_and_back() {
    let mut session = GameSession::new(1);
    press(&mut session, KeyCode::Down);
    assert_eq!(session.snapshot().selected_option(), Some(MenuOption::Controls));
    press(&mut session, KeyCode::Enter);
    assert_eq!(session.screen(), Screen::Controls);

    press(&mut session, KeyCode::Backspace);
    assert_eq!(session.screen(), Screen::Menu);
    assert_eq!(session.selection(), 0);
}

#[test]
fn test_menu_selection_wraps() {
    let mut session = GameSession::new(1);
    press(&mut session, KeyCode::Up);
    assert_eq!(session.snapshot().selected_option(), Some(MenuOption::Quit));
    press(&mut session, KeyCode::Down);
    assert_eq!(session.snapshot().selected_option(), Some(MenuOption::NewGame));
}

#[test]
fn test_pointer_click_quits_from_menu() {
    let mut session = GameSession::new(1);
    session.apply_action(pointer(290.0, 437.0));
    assert_eq!(session.snapshot().selected_option(), Some(MenuOption::Quit));
    session.apply_action(GameAction::PointerClick);
    assert!(session.quit_requested());
}

#[test]
fn test_pointer_scales_with_surface() {
    let mut session = GameSession::new(1);
    // Controls region is y 345..380 on a 600 tall surface.
    session.apply_action(GameAction::PointerMoved {
        x: 580.0,
        y: 724.0,
        width: 1200.0,
        height: 1200.0,
    });
    assert_eq!(session.snapshot().selected_option(), Some(MenuOption::Controls));
}

#[test]
fn test_end_back_to_menu_and_new_game() {
    let mut session = GameSession::new(4);
    session.apply_action(GameAction::Activate);
    session.tick(LOADING_MS);
    session.progress.set_level(2);
    session.progress.set_timer(1);
    session.tick(TIMER_INTERVAL_MS);
    assert_eq!(session.screen(), Screen::End);
    assert_eq!(session.snapshot().selected_option(), Some(MenuOption::Menu));

    session.apply_action(pointer(290.0, 140.0));
    assert!(session.score_revealed());
    session.apply_action(pointer(10.0, 10.0));
    assert!(!session.score_revealed());

    session.apply_action(GameAction::Activate);
    assert_eq!(session.screen(), Screen::Menu);
    assert_eq!(session.progress.level(), 1);

    session.apply_action(GameAction::Activate);
    session.tick(LOADING_MS);
    assert_eq!(session.screen(), Screen::Play);
    assert_eq!(session.progress.timer(), 15);
    assert_eq!(session.end_reason(), None);
}

#[test]
fn test_end_quit_option() {
    let mut session = GameSession::new(4);
    session.apply_action(GameAction::Activate);
    session.tick(LOADING_MS);
    session.progress.set_timer(1);
    session.tick(TIMER_INTERVAL_MS);
    session.apply_action(GameAction::Move(Direction::South));
    assert_eq!(session.snapshot().selected_option(), Some(MenuOption::Quit));
    session.apply_action(GameAction::Activate);
    assert!(session.quit_requested());
}

#[test]
fn test_pause_freezes_loading_but_not_highlight() {
    let mut session = GameSession::new(1);
    press(&mut session, KeyCode::Char('p'));
    assert!(session.paused());

    press(&mut session, KeyCode::Down);
    assert_eq!(session.selection(), 1);
    press(&mut session, KeyCode::Up);

    press(&mut session, KeyCode::Enter);
    assert_eq!(session.screen(), Screen::Loading);
    // New game clears the pause.
    assert!(!session.paused());

    press(&mut session, KeyCode::Char('p'));
    session.tick(LOADING_MS);
    assert_eq!(session.screen(), Screen::Loading);
    press(&mut session, KeyCode::Char('p'));
    session.tick(LOADING_MS);
    assert_eq!(session.screen(), Screen::Play);
}

#[test]
fn test_hooks_enter_once_per_change() {
    let mut session = GameSession::new(1);
    let mut hooks = Recorder::default();

    for _ in 0..3 {
        present(&mut session, &mut hooks).unwrap();
    }
    session.apply_action(GameAction::Activate);
    // Entering the current screen again is a no-op.
    session.enter(Screen::Loading);
    present(&mut session, &mut hooks).unwrap();
    session.tick(LOADING_MS);
    present(&mut session, &mut hooks).unwrap();
    session.enter(Screen::Play);
    present(&mut session, &mut hooks).unwrap();

    assert_eq!(hooks.entered, vec![Screen::Menu, Screen::Loading, Screen::Play]);
    assert_eq!(hooks.rendered.len(), 6);
    assert_eq!(hooks.rendered.last(), Some(&Screen::Play));
}

#[test]
fn test_held_turn_key_drives_helicopter() {
    let mut session = GameSession::new(1);
    session.apply_action(GameAction::Activate);
    session.tick(LOADING_MS);

    let mut input = InputHandler::new();
    let action = input.handle_key_press(KeyCode::Char('6')).expect("turn");
    session.apply_action(action);
    for _ in 0..4 {
        session.tick(0);
    }
    let snap = session.snapshot();
    assert_eq!(snap.camera.mode, ViewMode::Helicopter);
    assert_eq!(session.camera.orbit_deg(), ORBIT_START_DEG + 4.0 * ORBIT_STEP_DEG);

    let release = input.handle_key_release(KeyCode::Char('6')).expect("release");
    session.apply_action(release);
    assert_eq!(session.snapshot().camera.mode, ViewMode::Default);
}

#[test]
fn test_view_keys_toggle_in_play_only() {
    let mut session = GameSession::new(1);
    assert!(!press(&mut session, KeyCode::Char('7')));

    session.apply_action(GameAction::Activate);
    session.tick(LOADING_MS);
    press(&mut session, KeyCode::Char('9'));
    assert_eq!(session.snapshot().camera.mode, ViewMode::Top);
    press(&mut session, KeyCode::Char('7'));
    assert_eq!(session.snapshot().camera.mode, ViewMode::Tower);
    press(&mut session, KeyCode::Char('7'));
    assert_eq!(session.snapshot().camera.mode, ViewMode::Top);
}
