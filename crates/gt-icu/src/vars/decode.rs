use std::borrow::Cow;

use super::classify::{VAR_PREFIX, is_placeholder, placeholder_payload};
use super::traverse::{TraverseOptions, traverse};
use crate::parser::{ParseError, Span};

/// Replace every placeholder, indexed or not, with its value.
///
/// The output is spliced from the original text: everything outside the
/// placeholders is copied byte-for-byte. `_gt_var_name` cases are dropped
/// along with the rest of the placeholder.
///
/// ```
/// use gt_icu::decode_vars;
///
/// assert_eq!(
///     decode_vars("Hello {_gt_, select, other {World}}!").unwrap(),
///     "Hello World!"
/// );
/// ```
pub fn decode_vars(text: &str) -> Result<Cow<'_, str>, ParseError> {
    if !text.contains(VAR_PREFIX) {
        return Ok(Cow::Borrowed(text));
    }

    let mut splices: Vec<(Span, String)> = Vec::new();
    traverse(
        text,
        is_placeholder,
        |node, location| {
            if let (Some(span), Some(payload)) = (location, placeholder_payload(node)) {
                splices.push((span, payload.to_string()));
            }
        },
        TraverseOptions::builder().capture_location(true).build(),
    )?;

    tracing::debug!(placeholders = splices.len(), "decoded message variables");
    if splices.is_empty() {
        return Ok(Cow::Borrowed(text));
    }

    let mut decoded = String::with_capacity(text.len());
    let mut cursor = 0;
    for (span, payload) in &splices {
        decoded.push_str(&text[cursor..span.start]);
        decoded.push_str(payload);
        cursor = span.end;
    }
    decoded.push_str(&text[cursor..]);
    Ok(Cow::Owned(decoded))
}
