//! Key bindings for interactive mode.
//!
//! Maps crossterm KeyEvents to field actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// An action resulting from a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Type a character into the field.
    InsertChar(char),
    /// Delete the last character.
    Backspace,
    /// Empty the field.
    Clear,
    /// Accept the current value.
    Submit,
    /// Leave interactive mode.
    Quit,
    /// No action (ignore the key).
    Ignore,
}

/// Resolve a KeyEvent to a KeyAction.
pub fn resolve_key(key: KeyEvent) -> KeyAction {
    // Some platforms report releases and repeats as separate events
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('u') => KeyAction::Clear,
            _ => KeyAction::Ignore,
        };
    }

    match key.code {
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char(ch) => KeyAction::InsertChar(ch),
        _ => KeyAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl_key(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_printable_char() {
        assert_eq!(resolve_key(key(KeyCode::Char('a'))), KeyAction::InsertChar('a'));
        assert_eq!(resolve_key(key(KeyCode::Char('-'))), KeyAction::InsertChar('-'));
    }

    #[test]
    fn test_shifted_char_is_inserted() {
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(resolve_key(shifted), KeyAction::InsertChar('A'));
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(resolve_key(key(KeyCode::Backspace)), KeyAction::Backspace);
        assert_eq!(resolve_key(key(KeyCode::Enter)), KeyAction::Submit);
        assert_eq!(resolve_key(ctrl_key('u')), KeyAction::Clear);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(resolve_key(key(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(resolve_key(ctrl_key('c')), KeyAction::Quit);
        assert_eq!(resolve_key(ctrl_key('q')), KeyAction::Quit);
    }

    #[test]
    fn test_ignored_keys() {
        assert_eq!(resolve_key(key(KeyCode::Up)), KeyAction::Ignore);
        assert_eq!(resolve_key(ctrl_key('x')), KeyAction::Ignore);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('1'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(resolve_key(release), KeyAction::Ignore);
    }
}
