//! Key mapping from terminal events to player commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to a command.
///
/// Movement accepts arrows, vi keys and WASD. `y`/`n` only matter at the
/// game-over prompt; the engine ignores them elsewhere.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Command::MoveUp),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Command::MoveDown),

        // Actions
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::ToggleSelect),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::TogglePause),

        // Prompt
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(Command::ConfirmYes),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::ConfirmNo),

        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),

        _ => None,
    }
}

/// Whether an event should be acted on.
///
/// Auto-repeat counts as a press so held arrows keep moving the cursor;
/// releases are ignored.
pub fn is_press(key: &KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Left)),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Right)),
            Some(Command::MoveRight)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Up)),
            Some(Command::MoveUp)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Down)),
            Some(Command::MoveDown)
        );

        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('H'))),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('l'))),
            Some(Command::MoveRight)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('w'))),
            Some(Command::MoveUp)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('J'))),
            Some(Command::MoveDown)
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(Command::ToggleSelect)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Enter)),
            Some(Command::ToggleSelect)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('p'))),
            Some(Command::TogglePause)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('Y'))),
            Some(Command::ConfirmYes)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('n'))),
            Some(Command::ConfirmNo)
        );
        assert_eq!(command_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('q'))),
            Some(Command::Quit)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Esc)),
            Some(Command::Quit)
        );
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(command_for_key(KeyEvent::from(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_release_is_not_a_press() {
        let press = KeyEvent::from(KeyCode::Left);
        assert!(is_press(&press));

        let repeat = KeyEvent::new_with_kind_and_state(
            KeyCode::Left,
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
            KeyEventState::NONE,
        );
        assert!(is_press(&repeat));

        let release =
            KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Release);
        assert!(!is_press(&release));
    }
}
