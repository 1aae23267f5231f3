//! Application event loop for interactive mode.
//!
//! The `App` struct ties together a MaskedField, a Terminal, and key bindings
//! into a main event loop.

use anyhow::Result;
use itertools::Itertools;
use log::info;

use crate::field::MaskedField;
use crate::keybind::{self, KeyAction};
use crate::placeholder::Placeholder;
use crate::terminal::Terminal;

const TITLE_ROW: u16 = 0;
const FIELD_ROW: u16 = 1;
const LEGEND_ROW: u16 = 3;
const HELP_ROW: u16 = 4;

const FIELD_MARKER: &str = "> ";
const HELP: &str = "Enter: submit  Backspace: delete  Ctrl-U: clear  Esc: quit";

/// The interactive application state.
pub struct App {
    pub field: MaskedField,
    pub label: String,
    pub submitted: Vec<String>,
    pub running: bool,
}

impl App {
    pub fn new(field: MaskedField, label: &str) -> Self {
        Self {
            field,
            label: label.to_string(),
            submitted: Vec::new(),
            running: true,
        }
    }

    /// Run the main event loop. The terminal is restored even if reading
    /// keys fails.
    pub fn run(&mut self, terminal: &mut dyn Terminal) -> Result<()> {
        terminal.init()?;
        self.draw_static(terminal);
        let outcome = self.event_loop(terminal);
        terminal.cleanup()?;
        outcome
    }

    fn event_loop(&mut self, terminal: &mut dyn Terminal) -> Result<()> {
        while self.running {
            self.draw_field(terminal);
            let key = terminal.read_key()?;
            let action = keybind::resolve_key(key);
            self.handle_action(action, terminal);
        }
        Ok(())
    }

    /// Handle a resolved key action.
    fn handle_action(&mut self, action: KeyAction, terminal: &mut dyn Terminal) {
        match action {
            KeyAction::InsertChar(ch) => {
                if !self.field.insert_char(ch) {
                    terminal.beep();
                }
            }
            KeyAction::Backspace => {
                if !self.field.backspace() {
                    terminal.beep();
                }
            }
            KeyAction::Clear => {
                self.field.clear();
            }
            KeyAction::Submit => {
                let value = self.field.text().to_string();
                info!("submitted {:?}", value);
                self.submitted.push(value);
                self.field.clear();
            }
            KeyAction::Quit => {
                self.running = false;
            }
            KeyAction::Ignore => {}
        }
    }

    fn draw_static(&self, terminal: &mut dyn Terminal) {
        let formatter = self.field.formatter();
        let title = if formatter.is_enabled() {
            format!("{} [{}]", self.label, formatter)
        } else {
            format!("{} [no mask]", self.label)
        };
        draw_row(terminal, TITLE_ROW, &title);
        draw_row(terminal, LEGEND_ROW, &legend());
        draw_row(terminal, HELP_ROW, HELP);
    }

    fn draw_field(&self, terminal: &mut dyn Terminal) {
        let text = self.field.text();
        draw_row(terminal, FIELD_ROW, &format!("{}{}", FIELD_MARKER, text));
        let col = FIELD_MARKER.len() + text.chars().count();
        terminal.move_cursor(u16::try_from(col).unwrap_or(u16::MAX), FIELD_ROW);
        terminal.flush();
    }
}

fn draw_row(terminal: &mut dyn Terminal, row: u16, text: &str) {
    terminal.move_cursor(0, row);
    terminal.write_str(text);
    terminal.clear_eol();
}

/// One-line summary of the placeholder symbols.
fn legend() -> String {
    Placeholder::ALL
        .iter()
        .map(|p| format!("{} {}", p.symbol(), p.describe()))
        .join("  ")
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::formatter::MaskFormatter;
    use crate::terminal::{MockOp, MockTerminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(terminal: &mut MockTerminal, s: &str) {
        for ch in s.chars() {
            terminal.push_key(key(KeyCode::Char(ch)));
        }
    }

    fn phone_app() -> App {
        App::new(
            MaskedField::new(MaskFormatter::new("(###) ###-####").with_prefix("+1 ")),
            "Phone",
        )
    }

    #[test]
    fn test_typed_digits_are_masked() {
        let mut app = phone_app();
        let mut terminal = MockTerminal::new();
        type_str(&mut terminal, "5551234567");
        terminal.push_key(key(KeyCode::Esc));

        app.run(&mut terminal).unwrap();

        assert_eq!(app.field.text(), "+1 (555) 123-4567");
        assert!(!app.running);
        assert_eq!(terminal.ops.first(), Some(&MockOp::Init));
        assert_eq!(terminal.ops.last(), Some(&MockOp::Cleanup));
        assert_eq!(terminal.last_write_on(FIELD_ROW), Some("> +1 (555) 123-4567"));
    }

    #[test]
    fn test_rejected_keys_beep() {
        let mut app = phone_app();
        let mut terminal = MockTerminal::new();
        type_str(&mut terminal, "5x5");
        terminal.push_key(key(KeyCode::Esc));

        app.run(&mut terminal).unwrap();

        assert_eq!(app.field.text(), "+1 (55");
        assert_eq!(terminal.beeps(), 1);
    }

    #[test]
    fn test_submit_and_clear() {
        let mut app = phone_app();
        let mut terminal = MockTerminal::new();
        type_str(&mut terminal, "555");
        terminal.push_key(key(KeyCode::Enter));
        type_str(&mut terminal, "12");
        terminal.push_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        type_str(&mut terminal, "9");
        terminal.push_key(key(KeyCode::Enter));
        terminal.push_key(key(KeyCode::Esc));

        app.run(&mut terminal).unwrap();

        assert_eq!(app.submitted, vec!["+1 (555".to_string(), "+1 (9".to_string()]);
        assert_eq!(app.field.text(), "");
    }

    #[test]
    fn test_backspace_on_empty_field_beeps() {
        let mut app = phone_app();
        let mut terminal = MockTerminal::new();
        terminal.push_key(key(KeyCode::Backspace));
        terminal.push_key(key(KeyCode::Esc));

        app.run(&mut terminal).unwrap();

        assert_eq!(terminal.beeps(), 1);
    }

    #[test]
    fn test_cursor_follows_text() {
        let mut app = phone_app();
        let mut terminal = MockTerminal::new();
        type_str(&mut terminal, "55");
        terminal.push_key(key(KeyCode::Esc));

        app.run(&mut terminal).unwrap();

        // "> " + "+1 (55"
        assert_eq!((terminal.cursor_col, terminal.cursor_row), (8, FIELD_ROW));
    }

    #[test]
    fn test_static_rows() {
        let mut app = phone_app();
        let mut terminal = MockTerminal::new();
        terminal.push_key(key(KeyCode::Esc));

        app.run(&mut terminal).unwrap();

        assert_eq!(terminal.last_write_on(TITLE_ROW), Some("Phone [+1 (###) ###-####]"));
        assert_eq!(
            terminal.last_write_on(LEGEND_ROW),
            Some("# digit  @ letter  a lowercase  A uppercase  * letter or digit")
        );
        assert_eq!(terminal.last_write_on(HELP_ROW), Some(HELP));
    }

    #[test]
    fn test_terminal_restored_when_keys_run_out() {
        let mut app = phone_app();
        let mut terminal = MockTerminal::new();
        type_str(&mut terminal, "5");

        assert!(app.run(&mut terminal).is_err());
        assert_eq!(terminal.ops.last(), Some(&MockOp::Cleanup));
    }
}
