use std::borrow::Cow;

use super::classify::{OTHER_LABEL, VAR_PREFIX, is_unindexed_placeholder};
use super::traverse::{TraverseOptions, traverse};
use crate::parser::{Node, ParseError};
use crate::types::var_key;

/// Number every unindexed placeholder in document order and strip its value.
///
/// `{_gt_, select, other {John}}` becomes `{_gt_1, select, other {}}`. A
/// `_gt_var_name` case is kept. Text without `_gt_` is returned borrowed
/// without being parsed.
///
/// ```
/// use gt_icu::index_vars;
///
/// assert_eq!(
///     index_vars("Hi {_gt_, select, other {John}}").unwrap(),
///     "Hi {_gt_1, select, other {}}"
/// );
/// ```
pub fn index_vars(text: &str) -> Result<Cow<'_, str>, ParseError> {
    if !text.contains(VAR_PREFIX) {
        return Ok(Cow::Borrowed(text));
    }

    let mut count = 0;
    let message = traverse(
        text,
        is_unindexed_placeholder,
        |node, _| {
            let Node::Select(select) = node else {
                return;
            };
            count += 1;
            select.value = var_key(count);
            if let Some(other) = select.case_mut(OTHER_LABEL) {
                other.children.clear();
            }
            select.span = None;
        },
        TraverseOptions::default(),
    )?;

    tracing::debug!(placeholders = count, "indexed message variables");
    if count == 0 {
        return Ok(Cow::Borrowed(text));
    }
    Ok(Cow::Owned(message.print()))
}
