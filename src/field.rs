//! A single-line text field that keeps its contents masked.
//!
//! `MaskedField` owns a [`MaskFormatter`] and runs it on every change, so
//! callers only ever see formatted text. Interested parties register an
//! observer closure and are told about each new value; the field writes the
//! formatted text back directly, so observers are never notified twice for
//! one edit.

use std::fmt;

use log::debug;

use crate::formatter::MaskFormatter;
use crate::placeholder::CaseRule;
use crate::prefix::strip_prefix;

/// Handle returned by [`MaskedField::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&str)>;

pub struct MaskedField {
    formatter: MaskFormatter,
    text: String,
    observers: Vec<(ObserverId, Observer)>,
    next_id: u64,
}

impl MaskedField {
    pub fn new(formatter: MaskFormatter) -> Self {
        MaskedField {
            formatter,
            text: String::new(),
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn formatter(&self) -> &MaskFormatter {
        &self.formatter
    }

    /// The user-entered characters, without prefix or literals.
    pub fn value(&self) -> String {
        self.formatter.candidate(&self.text)
    }

    /// Register `observer` to be called with the new text after each change.
    pub fn subscribe(&mut self, observer: impl FnMut(&str) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Replace the raw text and reformat it.
    ///
    /// Returns true if the displayed text changed.
    pub fn set_text(&mut self, raw: &str) -> bool {
        let formatted = self.formatter.format(raw);
        self.store(formatted)
    }

    /// Append a typed character.
    ///
    /// Returns false when the mask rejected it and the text is unchanged.
    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut raw = self.text.clone();
        raw.push(ch);
        self.set_text(&raw)
    }

    /// Delete the last displayed character, literal or not, and reformat.
    pub fn backspace(&mut self) -> bool {
        let mut raw = self.text.clone();
        if raw.pop().is_none() {
            return false;
        }
        self.set_text(&raw)
    }

    pub fn clear(&mut self) -> bool {
        self.set_text("")
    }

    pub fn set_pattern(&mut self, pattern: &str) -> bool {
        self.formatter.set_pattern(pattern);
        self.reformat()
    }

    /// Change the prefix. The old prefix is removed from the current text
    /// first so its characters are not mistaken for input.
    pub fn set_prefix(&mut self, prefix: &str) -> bool {
        let raw = strip_prefix(&self.text, self.formatter.prefix()).to_string();
        self.formatter.set_prefix(prefix);
        self.set_text(&raw)
    }

    pub fn set_case_rule(&mut self, rule: CaseRule) -> bool {
        self.formatter.set_case_rule(rule);
        self.reformat()
    }

    fn reformat(&mut self) -> bool {
        let raw = self.text.clone();
        self.set_text(&raw)
    }

    fn store(&mut self, formatted: String) -> bool {
        if formatted == self.text {
            return false;
        }
        debug!("field text {:?} -> {:?}", self.text, formatted);
        self.text = formatted;
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.text);
        }
        true
    }
}

impl fmt::Display for MaskedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
