use std::collections::HashMap;

use crate::vars::VAR_PREFIX;

/// Placeholder key (`_gt_1`, `_gt_2`, ...) to variable text.
pub type VarMap = HashMap<String, String>;

/// Key for the `index`-th placeholder of a message, counting from 1.
///
/// ```
/// assert_eq!(gt_icu::var_key(3), "_gt_3");
/// ```
pub fn var_key(index: usize) -> String {
    format!("{VAR_PREFIX}{index}")
}
