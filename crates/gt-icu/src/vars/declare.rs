//! Builds placeholder fragments.

use bon::Builder;

use super::classify::{OTHER_LABEL, VAR_NAME_LABEL, VAR_PREFIX};
use super::sanitize::sanitize_var;
use crate::types::VarValue;

/// Options for [`declare_var`].
///
/// ```
/// use gt_icu::DeclareOptions;
///
/// let options = DeclareOptions::builder().name("user").build();
/// assert_eq!(options.name.as_deref(), Some("user"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct DeclareOptions {
    /// Human-readable variable name shown to translators.
    #[builder(into)]
    pub name: Option<String>,
}

/// Build an unindexed placeholder carrying `value`.
///
/// The result is a message fragment meant to be spliced into a larger
/// message; it is not parsed here.
///
/// ```
/// use gt_icu::{DeclareOptions, declare_var};
///
/// assert_eq!(
///     declare_var("John", &DeclareOptions::default()),
///     "{_gt_, select, other {John}}"
/// );
/// ```
pub fn declare_var(value: impl Into<VarValue>, options: &DeclareOptions) -> String {
    let value = value.into().to_string();
    let mut fragment = format!(
        "{{{VAR_PREFIX}, select, {OTHER_LABEL} {{{}}}",
        sanitize_var(&value)
    );
    if let Some(name) = &options.name {
        fragment.push_str(&format!(" {VAR_NAME_LABEL} {{{}}}", sanitize_var(name)));
    }
    fragment.push('}');
    fragment
}
