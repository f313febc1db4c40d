//! Recognizes placeholder nodes.
//!
//! Every pass classifies nodes through these predicates and nothing else;
//! `index_vars` and `extract_vars` rely on visiting exactly the same nodes.

use crate::parser::{Case, Node, Select};

/// Reserved discriminant of an unindexed placeholder, and prefix of indexed ones.
pub const VAR_PREFIX: &str = "_gt_";

/// Case label carrying a translator-facing variable name.
pub const VAR_NAME_LABEL: &str = "_gt_var_name";

/// Case label carrying the variable's text.
pub const OTHER_LABEL: &str = "other";

/// `{_gt_, select, other {...}}` with a plain-text `other` case.
pub fn is_unindexed_placeholder(node: &Node) -> bool {
    matches!(node, Node::Select(select) if select.value == VAR_PREFIX && has_text_payload(select))
}

/// `{_gt_<N>, select, other {...}}` with a plain-text `other` case.
pub fn is_indexed_placeholder(node: &Node) -> bool {
    matches!(node, Node::Select(select) if is_indexed(&select.value) && has_text_payload(select))
}

/// Either kind of placeholder.
pub fn is_placeholder(node: &Node) -> bool {
    is_unindexed_placeholder(node) || is_indexed_placeholder(node)
}

/// Text of a placeholder's `other` case. `None` if `node` is not a placeholder.
pub fn placeholder_payload(node: &Node) -> Option<&str> {
    let select = placeholder(node)?;
    case_text(select.case(OTHER_LABEL)?)
}

/// Text of a placeholder's `_gt_var_name` case, if it has a plain-text one.
pub fn placeholder_name(node: &Node) -> Option<&str> {
    let select = placeholder(node)?;
    case_text(select.case(VAR_NAME_LABEL)?)
}

fn placeholder(node: &Node) -> Option<&Select> {
    if is_placeholder(node) {
        node.as_select()
    } else {
        None
    }
}

/// `_gt_` followed by one or more ASCII digits.
pub(crate) fn is_indexed(discriminant: &str) -> bool {
    discriminant
        .strip_prefix(VAR_PREFIX)
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

fn has_text_payload(select: &Select) -> bool {
    select.case(OTHER_LABEL).and_then(case_text).is_some()
}

/// Content of a case that is empty or a single literal.
fn case_text(case: &Case) -> Option<&str> {
    match case.children.as_slice() {
        [] => Some(""),
        [Node::Literal(literal)] => Some(&literal.value),
        _ => None,
    }
}
