use super::classify::{VAR_PREFIX, is_unindexed_placeholder, placeholder_name, placeholder_payload};
use super::traverse::{TraverseOptions, traverse};
use crate::parser::{Node, ParseError};
use crate::types::{VarMap, var_key};

/// Collect the value of every unindexed placeholder, keyed `_gt_1`, `_gt_2`,
/// ... in document order.
///
/// The keys match the numbers [`index_vars`](super::index_vars) assigns to
/// the same text.
///
/// ```
/// use gt_icu::extract_vars;
///
/// let vars = extract_vars("Hello {_gt_, select, other {World}}").unwrap();
/// assert_eq!(vars["_gt_1"], "World");
/// ```
pub fn extract_vars(text: &str) -> Result<VarMap, ParseError> {
    harvest(text, placeholder_payload)
}

/// Collect the `_gt_var_name` of every unindexed placeholder that has one,
/// keyed like [`extract_vars`].
pub fn extract_var_names(text: &str) -> Result<VarMap, ParseError> {
    harvest(text, placeholder_name)
}

fn harvest(text: &str, field: fn(&Node) -> Option<&str>) -> Result<VarMap, ParseError> {
    let mut vars = VarMap::new();
    if !text.contains(VAR_PREFIX) {
        return Ok(vars);
    }

    let mut count = 0;
    traverse(
        text,
        is_unindexed_placeholder,
        |node, _| {
            count += 1;
            if let Some(value) = field(node) {
                vars.insert(var_key(count), value.to_string());
            }
        },
        TraverseOptions::default(),
    )?;

    tracing::debug!(placeholders = count, harvested = vars.len(), "extracted message variables");
    Ok(vars)
}
