//! Masked text input formatting.
//!
//! A mask pattern mixes literal characters with typed placeholder slots
//! (`#` digit, `@` letter, `a` lowercase, `A` uppercase, `*` letter or digit).
//! Raw text is stripped of a previously applied prefix and of everything that
//! is not an ASCII letter or digit, then scanned against the pattern.
//!
//! # Example
//!
//! ```rust
//! use maskfield::{MaskFormatter, MaskedField};
//!
//! let mask = MaskFormatter::new("#####-####").with_prefix("+55 ");
//! assert_eq!(mask.format("01234567890123456789"), "+55 01234-5678");
//! assert_eq!(mask.max_length(), 14);
//!
//! // A field reformats on every edit.
//! let mut field = MaskedField::new(mask);
//! for ch in "012345".chars() {
//!     field.insert_char(ch);
//! }
//! assert_eq!(field.text(), "+55 01234-5");
//!
//! // Characters a slot does not accept are dropped.
//! assert!(!field.insert_char('x'));
//! assert_eq!(field.text(), "+55 01234-5");
//! ```

pub mod app;
pub mod config;
mod field;
mod formatter;
mod keybind;
mod placeholder;
mod prefix;
pub mod terminal;

pub use app::App;
pub use config::MaskConfig;
pub use field::{MaskedField, ObserverId};
pub use formatter::{MaskFormatter, format_masked};
pub use keybind::{KeyAction, resolve_key};
pub use placeholder::{CaseRule, Placeholder, UnknownCaseRule, sanitize};
pub use prefix::strip_prefix;
pub use terminal::{CrosstermTerminal, Terminal};
