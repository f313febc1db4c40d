//! Non-translatable variables inside ICU MessageFormat strings.
//!
//! A variable travels through a message as a placeholder: a `select` on the
//! reserved discriminant `_gt_` whose `other` case carries the value. The
//! crate provides the passes that move placeholders through a translation
//! pipeline:
//!
//! - [`declare_var`] builds a placeholder from a value.
//! - [`decode_vars`] inlines placeholder values, for text that is not translated.
//! - [`extract_vars`] and [`index_vars`] split a message into a value map and
//!   a numbered template for translators.
//! - [`condense_vars`] reduces numbered placeholders to bare `{_gt_N}`
//!   arguments for the renderer.
//!
//! ```
//! use gt_icu::{DeclareOptions, condense_vars, declare_var, extract_vars, index_vars};
//!
//! let message = format!("Hello {}", declare_var("Ana", &DeclareOptions::default()));
//! let vars = extract_vars(&message).unwrap();
//! let template = index_vars(&message).unwrap();
//!
//! assert_eq!(template, "Hello {_gt_1, select, other {}}");
//! assert_eq!(condense_vars(&template).unwrap(), "Hello {_gt_1}");
//! assert_eq!(vars["_gt_1"], "Ana");
//! ```

pub mod parser;
pub mod types;
pub mod vars;

pub use parser::{Message, Node, ParseError, Span};
pub use types::{VarMap, VarValue, var_key};
pub use vars::{
    DeclareOptions, TraverseOptions, VarWarning, condense_vars, decode_vars, declare_var,
    extract_var_names, extract_vars, index_vars, lint_vars, sanitize_var, traverse,
};

/// Creates a [`VarMap`] from key-value pairs.
///
/// Values are converted via `Into<VarValue>` and stored as text, so you can
/// pass integers, floats, booleans or strings directly.
///
/// # Example
///
/// ```
/// use gt_icu::vars;
///
/// let v = vars! { "_gt_1" => 3, "_gt_2" => "Alice" };
/// assert_eq!(v.len(), 2);
/// assert_eq!(v["_gt_1"], "3");
/// assert_eq!(v["_gt_2"], "Alice");
/// ```
#[macro_export]
macro_rules! vars {
    {} => {
        $crate::VarMap::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::VarMap::new();
            $(
                map.insert(
                    $key.to_string(),
                    ::std::convert::Into::<$crate::VarValue>::into($value).to_string(),
                );
            )+
            map
        }
    };
}
