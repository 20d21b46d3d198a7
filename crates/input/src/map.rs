//! Key and mouse mapping from terminal events to game actions.

use crate::types::{Direction, GameAction, ViewMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to game actions.
///
/// The helicopter turn keys (`4` / `6`) are not mapped here; they are
/// press/release pairs tracked by [`crate::InputHandler`].
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Step (menus: move the highlight)
        KeyCode::Up => Some(GameAction::Move(Direction::North)),
        KeyCode::Down => Some(GameAction::Move(Direction::South)),
        KeyCode::Left => Some(GameAction::Move(Direction::West)),
        KeyCode::Right => Some(GameAction::Move(Direction::East)),

        // Face without stepping
        KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::Face(Direction::North)),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::Face(Direction::South)),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::Face(Direction::West)),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::Face(Direction::East)),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::Jump),
        KeyCode::Enter => Some(GameAction::Activate),
        KeyCode::Backspace => Some(GameAction::Back),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(GameAction::StrideUp),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(GameAction::StrideDown),

        // Camera (keypad layout)
        KeyCode::Char('7') => Some(GameAction::ToggleView(ViewMode::Tower)),
        KeyCode::Char('9') => Some(GameAction::ToggleView(ViewMode::Top)),
        KeyCode::Char('1') => Some(GameAction::ToggleView(ViewMode::Follow)),
        KeyCode::Char('3') => Some(GameAction::ToggleView(ViewMode::Adventure)),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a mouse event on a `cols` x `rows` terminal to a game action.
///
/// Positions are reported at the centre of the character cell. A left press
/// only moves the pointer; the click itself fires on release so the session
/// sees the position first.
pub fn handle_mouse_event(mouse: MouseEvent, cols: u16, rows: u16) -> Option<GameAction> {
    let pointer = || GameAction::PointerMoved {
        x: mouse.column as f32 + 0.5,
        y: mouse.row as f32 + 0.5,
        width: cols.max(1) as f32,
        height: rows.max(1) as f32,
    };
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(pointer()),
        MouseEventKind::Down(MouseButton::Left) => Some(pointer()),
        MouseEventKind::Up(MouseButton::Left) => Some(GameAction::PointerClick),
        MouseEventKind::Down(MouseButton::Right) => Some(GameAction::Jump),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_arrow_keys_step() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::Move(Direction::North))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::Move(Direction::South))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::Move(Direction::West))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::Move(Direction::East))
        );
    }

    #[test]
    fn test_wasd_only_faces() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(GameAction::Face(Direction::North))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(GameAction::Face(Direction::East))
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Jump)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Activate)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Backspace)),
            Some(GameAction::Back)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameAction::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('f'))),
            Some(GameAction::StrideUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('g'))),
            Some(GameAction::StrideDown)
        );
    }

    #[test]
    fn test_view_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('7'))),
            Some(GameAction::ToggleView(ViewMode::Tower))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('9'))),
            Some(GameAction::ToggleView(ViewMode::Top))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(GameAction::ToggleView(ViewMode::Follow))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('3'))),
            Some(GameAction::ToggleView(ViewMode::Adventure))
        );
        // Turn keys belong to the handler.
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('4'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_mouse_motion_reports_cell_centre() {
        let action = handle_mouse_event(mouse(MouseEventKind::Moved, 10, 4), 80, 24);
        assert_eq!(
            action,
            Some(GameAction::PointerMoved {
                x: 10.5,
                y: 4.5,
                width: 80.0,
                height: 24.0,
            })
        );
    }

    #[test]
    fn test_mouse_buttons() {
        assert!(matches!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 1, 1), 80, 24),
            Some(GameAction::PointerMoved { .. })
        ));
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 1, 1), 80, 24),
            Some(GameAction::PointerClick)
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1), 80, 24),
            Some(GameAction::Jump)
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollUp, 1, 1), 80, 24),
            None
        );
    }
}
