//! Placeholder kinds and their character filters.
//!
//! | Symbol | Kind           | Accepts                  | Transform       |
//! |--------|----------------|--------------------------|-----------------|
//! | `*`    | `AlphaNumeric` | ASCII letter or digit    | none            |
//! | `@`    | `Letter`       | ASCII letter             | none            |
//! | `a`    | `LowerLetter`  | ASCII letter             | force lowercase |
//! | `A`    | `UpperLetter`  | ASCII letter             | force uppercase |
//! | `#`    | `Digit`        | ASCII digit              | none            |
//!
//! Any other pattern character is a literal.

use std::fmt;
use std::str::FromStr;

use phf::{Map, phf_map};

/// One typed slot of a mask pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    AlphaNumeric, // *
    Letter,       // @
    LowerLetter,  // a
    UpperLetter,  // A
    Digit,        // #
}

/// How `LowerLetter` and `UpperLetter` slots treat letters of the wrong case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseRule {
    /// Accept any ASCII letter and convert it to the slot's case.
    #[default]
    Fold,
    /// Accept only letters already in the slot's case.
    Strict,
}

/// Pattern symbol to placeholder kind.
const SYMBOL_TO_PLACEHOLDER: Map<char, Placeholder> = phf_map! {
    '#' => Placeholder::Digit,
    '*' => Placeholder::AlphaNumeric,
    '@' => Placeholder::Letter,
    'A' => Placeholder::UpperLetter,
    'a' => Placeholder::LowerLetter,
};

impl Placeholder {
    /// All kinds, in legend order.
    pub const ALL: [Placeholder; 5] = [
        Placeholder::Digit,
        Placeholder::Letter,
        Placeholder::LowerLetter,
        Placeholder::UpperLetter,
        Placeholder::AlphaNumeric,
    ];

    /// Look up the kind for a pattern character, or `None` for a literal.
    pub fn from_symbol(ch: char) -> Option<Placeholder> {
        SYMBOL_TO_PLACEHOLDER.get(&ch).copied()
    }

    pub fn symbol(self) -> char {
        match self {
            Placeholder::AlphaNumeric => '*',
            Placeholder::Letter => '@',
            Placeholder::LowerLetter => 'a',
            Placeholder::UpperLetter => 'A',
            Placeholder::Digit => '#',
        }
    }

    /// Short human-readable name, used in the interactive legend.
    pub fn describe(self) -> &'static str {
        match self {
            Placeholder::AlphaNumeric => "letter or digit",
            Placeholder::Letter => "letter",
            Placeholder::LowerLetter => "lowercase",
            Placeholder::UpperLetter => "uppercase",
            Placeholder::Digit => "digit",
        }
    }

    /// Offer `ch` to this slot.
    ///
    /// Returns the character to emit (possibly case-converted), or `None` if
    /// the slot rejects it. Non-ASCII characters are always rejected.
    pub fn filter(self, ch: char, rule: CaseRule) -> Option<char> {
        match self {
            Placeholder::AlphaNumeric => ch.is_ascii_alphanumeric().then_some(ch),
            Placeholder::Letter => ch.is_ascii_alphabetic().then_some(ch),
            Placeholder::Digit => ch.is_ascii_digit().then_some(ch),
            Placeholder::LowerLetter => match rule {
                CaseRule::Fold => ch.is_ascii_alphabetic().then(|| ch.to_ascii_lowercase()),
                CaseRule::Strict => ch.is_ascii_lowercase().then_some(ch),
            },
            Placeholder::UpperLetter => match rule {
                CaseRule::Fold => ch.is_ascii_alphabetic().then(|| ch.to_ascii_uppercase()),
                CaseRule::Strict => ch.is_ascii_uppercase().then_some(ch),
            },
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for CaseRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseRule::Fold => write!(f, "fold"),
            CaseRule::Strict => write!(f, "strict"),
        }
    }
}

/// Error returned when a case rule name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCaseRule(pub String);

impl fmt::Display for UnknownCaseRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown case rule {:?} (expected \"fold\" or \"strict\")",
            self.0
        )
    }
}

impl std::error::Error for UnknownCaseRule {}

impl FromStr for CaseRule {
    type Err = UnknownCaseRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fold" => Ok(CaseRule::Fold),
            "strict" => Ok(CaseRule::Strict),
            _ => Err(UnknownCaseRule(s.to_string())),
        }
    }
}

/// Drop every character that is not an ASCII letter or digit.
pub fn sanitize(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphanumeric).collect()
}
