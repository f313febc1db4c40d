//! Variable placeholders embedded in ICU messages.
//!
//! A placeholder is a `select` on the reserved discriminant `_gt_` whose
//! `other` case holds the variable's text. This module declares placeholders,
//! numbers them, harvests their values, inlines them, and condenses numbered
//! placeholders into bare arguments. All passes share one traversal engine
//! and one classifier so their numbering always agrees.

mod classify;
mod condense;
mod decode;
mod declare;
mod extract;
mod index;
mod lint;
mod sanitize;
mod traverse;

pub use classify::{
    OTHER_LABEL, VAR_NAME_LABEL, VAR_PREFIX, is_indexed_placeholder, is_placeholder,
    is_unindexed_placeholder, placeholder_name, placeholder_payload,
};
pub use condense::condense_vars;
pub use decode::decode_vars;
pub use declare::{DeclareOptions, declare_var};
pub use extract::{extract_var_names, extract_vars};
pub use index::index_vars;
pub use lint::{VarWarning, lint_vars};
pub use sanitize::sanitize_var;
pub use traverse::{TraverseOptions, traverse, walk};
