//! The mask scanner.
//!
//! A pattern is a sequence of literal characters and placeholder symbols
//! (see [`crate::placeholder`]). Formatting walks the pattern and the
//! sanitized input in lockstep:
//!
//! - a placeholder offers the next input character to its filter. The input
//!   character is consumed either way; the pattern only advances when the
//!   character was accepted.
//! - a literal is copied to the output and consumes no input.
//!
//! Scanning stops as soon as either sequence runs out. There is no
//! backtracking, so a rejected character is never offered to a later slot.
//!
//! All lengths are counted in `char`s.

use std::fmt;

use log::{debug, trace};

use crate::placeholder::{CaseRule, Placeholder, sanitize};
use crate::prefix::strip_prefix;

/// A mask pattern plus the prefix and case rule used to format text with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskFormatter {
    pattern: Vec<char>,
    prefix: String,
    prefix_len: usize,
    case_rule: CaseRule,
}

impl MaskFormatter {
    /// Create a formatter for `pattern` with no prefix.
    ///
    /// An empty pattern disables masking: [`format`](Self::format) then
    /// returns its input unchanged.
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.chars().collect(),
            ..Self::default()
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.set_prefix(prefix);
        self
    }

    pub fn with_case_rule(mut self, rule: CaseRule) -> Self {
        self.case_rule = rule;
        self
    }

    pub fn set_pattern(&mut self, pattern: &str) {
        debug!("mask pattern set to {:?}", pattern);
        self.pattern = pattern.chars().collect();
    }

    pub fn set_prefix(&mut self, prefix: &str) {
        debug!("mask prefix set to {:?}", prefix);
        self.prefix = prefix.to_string();
        self.prefix_len = prefix.chars().count();
    }

    pub fn set_case_rule(&mut self, rule: CaseRule) {
        self.case_rule = rule;
    }

    pub fn pattern(&self) -> String {
        self.pattern.iter().collect()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn case_rule(&self) -> CaseRule {
        self.case_rule
    }

    /// Is a mask active?
    pub fn is_enabled(&self) -> bool {
        !self.pattern.is_empty()
    }

    /// Number of placeholder slots in the pattern.
    pub fn slot_count(&self) -> usize {
        self.pattern
            .iter()
            .filter(|&&ch| Placeholder::from_symbol(ch).is_some())
            .count()
    }

    /// Upper bound on the length of any masked output: pattern plus prefix.
    pub fn max_length(&self) -> usize {
        self.pattern.len() + self.prefix_len
    }

    /// The user-entered part of `raw`: prefix removed, then every
    /// non-alphanumeric character dropped.
    pub fn candidate(&self, raw: &str) -> String {
        sanitize(strip_prefix(raw, &self.prefix))
    }

    /// Format `raw` against the current pattern.
    ///
    /// Never fails. Output is empty when nothing in `raw` survives
    /// sanitizing, and the prefix is only emitted in front of a non-empty
    /// masked body.
    pub fn format(&self, raw: &str) -> String {
        if self.pattern.is_empty() {
            return raw.to_string();
        }

        let candidate: Vec<char> = self.candidate(raw).chars().collect();
        if candidate.is_empty() {
            trace!("format {:?}: no candidate characters", raw);
            return String::new();
        }

        let body = Scanner::new(&self.pattern, &candidate, self.case_rule).run();
        if body.is_empty() {
            trace!("format {:?}: every candidate character rejected", raw);
            return String::new();
        }

        let mut out = String::with_capacity(self.prefix.len() + body.len());
        out.push_str(&self.prefix);
        out.push_str(&body);
        let out = truncate_chars(out, self.max_length());
        trace!("format {:?} -> {:?}", raw, out);
        out
    }
}

impl fmt::Display for MaskFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix)?;
        for ch in &self.pattern {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

/// Format once with the default case rule.
pub fn format_masked(pattern: &str, prefix: &str, raw: &str) -> String {
    MaskFormatter::new(pattern).with_prefix(prefix).format(raw)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    Done,
}

/// Two-tape automaton over the pattern and the candidate characters.
struct Scanner<'a> {
    pattern: &'a [char],
    input: &'a [char],
    rule: CaseRule,
    pat_pos: usize,
    in_pos: usize,
    out: String,
}

impl<'a> Scanner<'a> {
    fn new(pattern: &'a [char], input: &'a [char], rule: CaseRule) -> Self {
        Self {
            pattern,
            input,
            rule,
            pat_pos: 0,
            in_pos: 0,
            out: String::with_capacity(pattern.len()),
        }
    }

    fn run(mut self) -> String {
        while self.step() == ScanState::Scanning {}
        self.out
    }

    fn step(&mut self) -> ScanState {
        let (Some(&pc), Some(&ic)) = (self.pattern.get(self.pat_pos), self.input.get(self.in_pos))
        else {
            return ScanState::Done;
        };

        match Placeholder::from_symbol(pc) {
            Some(slot) => {
                if let Some(accepted) = slot.filter(ic, self.rule) {
                    self.out.push(accepted);
                    self.pat_pos += 1;
                }
                self.in_pos += 1;
            }
            None => {
                self.out.push(pc);
                self.pat_pos += 1;
            }
        }
        ScanState::Scanning
    }
}

/// Keep at most `max` characters of `s`.
fn truncate_chars(mut s: String, max: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        s.truncate(idx);
    }
    s
}
