use std::borrow::Cow;
use std::mem;

use super::classify::{VAR_PREFIX, is_indexed_placeholder};
use super::traverse::{TraverseOptions, traverse};
use crate::parser::{Argument, Node, ParseError};

/// Turn every indexed placeholder into a bare argument: `{_gt_1, select,
/// other {}}` becomes `{_gt_1}`. All cases, including `_gt_var_name`, are
/// dropped.
///
/// ```
/// use gt_icu::condense_vars;
///
/// assert_eq!(
///     condense_vars("Hello {_gt_1, select, other {World}}").unwrap(),
///     "Hello {_gt_1}"
/// );
/// ```
pub fn condense_vars(text: &str) -> Result<Cow<'_, str>, ParseError> {
    if !text.contains(VAR_PREFIX) {
        return Ok(Cow::Borrowed(text));
    }

    let mut count = 0;
    let message = traverse(
        text,
        is_indexed_placeholder,
        |node, _| {
            if let Node::Select(select) = node {
                let value = mem::take(&mut select.value);
                *node = Node::Argument(Argument::new(value));
                count += 1;
            }
        },
        TraverseOptions::default(),
    )?;

    tracing::debug!(placeholders = count, "condensed message variables");
    if count == 0 {
        return Ok(Cow::Borrowed(text));
    }
    Ok(Cow::Owned(message.print()))
}
