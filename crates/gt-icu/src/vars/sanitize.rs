//! Escapes arbitrary text into an ICU literal.

use crate::parser::escape_literal;

/// Escape `value` so that, placed inside a placeholder's `other` case, it
/// parses as exactly one literal whose text is `value`.
///
/// Apostrophes are doubled. The stretch between the first and the last of
/// `{`, `}`, `<` and `>` is wrapped in a single quoted run, so braces and
/// tag-like text never become ICU structure. `#` is left alone since it is
/// only special directly inside a plural case.
///
/// ```
/// use gt_icu::sanitize_var;
///
/// assert_eq!(sanitize_var("it's"), "it''s");
/// assert_eq!(sanitize_var("a {b} c"), "a '{b}' c");
/// assert_eq!(sanitize_var("#1"), "#1");
/// ```
pub fn sanitize_var(value: &str) -> String {
    escape_literal(value, false)
}
