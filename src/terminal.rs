//! Terminal abstraction layer.
//!
//! Provides a `Terminal` trait for the interactive field and two
//! implementations:
//! - `CrosstermTerminal` for real terminal interaction
//! - `MockTerminal` for testing

use std::io::Write;

use anyhow::Result;
use crossterm::event::{Event, KeyEvent};

/// Abstraction over terminal operations.
pub trait Terminal {
    /// Enter raw mode and prepare the terminal.
    fn init(&mut self) -> Result<()>;

    /// Restore the terminal to its original state.
    fn cleanup(&mut self) -> Result<()>;

    /// Move the cursor to (col, row), both 0-based.
    fn move_cursor(&mut self, col: u16, row: u16);

    /// Write a string at the current cursor position.
    fn write_str(&mut self, s: &str);

    /// Clear from cursor to end of line.
    fn clear_eol(&mut self);

    /// Sound the terminal bell.
    fn beep(&mut self);

    /// Flush output to the terminal.
    fn flush(&mut self);

    /// Block until a key event is received.
    fn read_key(&mut self) -> Result<KeyEvent>;
}

/// Real terminal using crossterm.
#[derive(Debug, Default)]
pub struct CrosstermTerminal {
    active: bool,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Terminal for CrosstermTerminal {
    fn init(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::EnterAlternateScreen,
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All)
        )?;
        self.active = true;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;
        crossterm::terminal::disable_raw_mode()?;
        self.active = false;
        Ok(())
    }

    fn move_cursor(&mut self, col: u16, row: u16) {
        crossterm::execute!(std::io::stdout(), crossterm::cursor::MoveTo(col, row)).ok();
    }

    fn write_str(&mut self, s: &str) {
        crossterm::execute!(std::io::stdout(), crossterm::style::Print(s)).ok();
    }

    fn clear_eol(&mut self) {
        crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::Clear(crossterm::terminal::ClearType::UntilNewLine)
        )
        .ok();
    }

    fn beep(&mut self) {
        crossterm::execute!(std::io::stdout(), crossterm::style::Print('\x07')).ok();
    }

    fn flush(&mut self) {
        std::io::stdout().flush().ok();
    }

    fn read_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(key) = crossterm::event::read()? {
                return Ok(key);
            }
            // Ignore mouse, focus and resize events
        }
    }
}

/// Mock terminal for testing; records all operations.
#[cfg(test)]
pub struct MockTerminal {
    pub cursor_col: u16,
    pub cursor_row: u16,
    pub ops: Vec<MockOp>,
    pub key_queue: Vec<KeyEvent>,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum MockOp {
    Init,
    Cleanup,
    MoveCursor(u16, u16),
    WriteStr(String),
    ClearEol,
    Beep,
    Flush,
}

#[cfg(test)]
impl MockTerminal {
    pub fn new() -> Self {
        Self {
            cursor_col: 0,
            cursor_row: 0,
            ops: Vec::new(),
            key_queue: Vec::new(),
        }
    }

    pub fn push_key(&mut self, key: KeyEvent) {
        self.key_queue.push(key);
    }

    pub fn beeps(&self) -> usize {
        self.ops.iter().filter(|op| **op == MockOp::Beep).count()
    }

    /// The text most recently written to `row`.
    pub fn last_write_on(&self, row: u16) -> Option<&str> {
        let mut current_row = 0;
        let mut last = None;
        for op in &self.ops {
            match op {
                MockOp::MoveCursor(_, r) => current_row = *r,
                MockOp::WriteStr(s) if current_row == row => last = Some(s.as_str()),
                _ => {}
            }
        }
        last
    }
}

#[cfg(test)]
impl Terminal for MockTerminal {
    fn init(&mut self) -> Result<()> {
        self.ops.push(MockOp::Init);
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.ops.push(MockOp::Cleanup);
        Ok(())
    }

    fn move_cursor(&mut self, col: u16, row: u16) {
        self.cursor_col = col;
        self.cursor_row = row;
        self.ops.push(MockOp::MoveCursor(col, row));
    }

    fn write_str(&mut self, s: &str) {
        self.ops.push(MockOp::WriteStr(s.to_string()));
    }

    fn clear_eol(&mut self) {
        self.ops.push(MockOp::ClearEol);
    }

    fn beep(&mut self) {
        self.ops.push(MockOp::Beep);
    }

    fn flush(&mut self) {
        self.ops.push(MockOp::Flush);
    }

    fn read_key(&mut self) -> Result<KeyEvent> {
        if self.key_queue.is_empty() {
            anyhow::bail!("No more keys in mock queue");
        }
        Ok(self.key_queue.remove(0))
    }
}
