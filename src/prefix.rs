//! Removal of a previously applied prefix from raw field text.

/// Strip a leading `prefix` from `raw`.
///
/// The match is an exact literal comparison on the unsanitized text. When
/// `raw` does not start with `prefix` (the user deleted part of it, or the
/// field has never been formatted) it is returned unchanged.
pub fn strip_prefix<'a>(raw: &'a str, prefix: &str) -> &'a str {
    raw.strip_prefix(prefix).unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_leading_prefix() {
        assert_eq!(strip_prefix("+55 01234-5678", "+55 "), "01234-5678");
    }

    #[test]
    fn exact_prefix_leaves_nothing() {
        assert_eq!(strip_prefix("+55 ", "+55 "), "");
    }

    #[test]
    fn missing_prefix_is_untouched() {
        assert_eq!(strip_prefix("01234", "+55 "), "01234");
        // Partially deleted prefix.
        assert_eq!(strip_prefix("+5 01234", "+55 "), "+5 01234");
        // Prefix appearing later in the text.
        assert_eq!(strip_prefix("1+55 2", "+55 "), "1+55 2");
    }

    #[test]
    fn empty_prefix_is_noop() {
        assert_eq!(strip_prefix("abc", ""), "abc");
        assert_eq!(strip_prefix("", ""), "");
    }

    #[test]
    fn multibyte_prefix() {
        assert_eq!(strip_prefix("№ 42", "№ "), "42");
    }
}
