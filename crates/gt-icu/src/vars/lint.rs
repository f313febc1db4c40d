//! Reports placeholders that every pass will silently leave alone.
//!
//! Classification misses are not errors for the passes, but they usually mean
//! a variable will be shown to translators (or rendered) as raw ICU. The lint
//! walks the whole message, including inside select cases that look like
//! placeholders, and explains each near miss.

use strsim::levenshtein;
use thiserror::Error;

use super::classify::{VAR_PREFIX, is_indexed, is_placeholder};
use super::traverse::{TraverseOptions, traverse};
use crate::parser::{Node, ParseError, Span};

/// A suspicious placeholder found by [`lint_vars`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VarWarning {
    /// Discriminant starts with `_gt_` but is neither `_gt_` nor `_gt_<N>`.
    #[error("'{discriminant}' is not a placeholder: expected `_gt_` or `_gt_` followed by digits")]
    MalformedDiscriminant {
        discriminant: String,
        span: Option<Span>,
    },

    /// Discriminant is one edit away from `_gt_` (ignoring a numeric suffix).
    #[error("'{discriminant}' looks like a misspelled placeholder; did you mean '{suggestion}'?")]
    SuspiciousDiscriminant {
        discriminant: String,
        suggestion: String,
        span: Option<Span>,
    },

    /// A placeholder discriminant on something other than a select.
    #[error("'{discriminant}' is used as a {kind}; placeholders must be `select` arguments")]
    WrongArgumentKind {
        discriminant: String,
        kind: &'static str,
        span: Option<Span>,
    },

    /// Correct discriminant, but the `other` case is not plain text.
    #[error("placeholder '{discriminant}' has an `other` case that is not plain text")]
    OpaquePayloadShape {
        discriminant: String,
        span: Option<Span>,
    },
}

impl VarWarning {
    /// Source span of the offending node.
    pub fn span(&self) -> Option<Span> {
        match self {
            VarWarning::MalformedDiscriminant { span, .. }
            | VarWarning::SuspiciousDiscriminant { span, .. }
            | VarWarning::WrongArgumentKind { span, .. }
            | VarWarning::OpaquePayloadShape { span, .. } => *span,
        }
    }
}

/// Lint every select and plural in `text` for near-miss placeholders.
///
/// ```
/// use gt_icu::{VarWarning, lint_vars};
///
/// let warnings = lint_vars("{_gt_user, select, other {x}}").unwrap();
/// assert!(matches!(warnings[0], VarWarning::MalformedDiscriminant { .. }));
/// ```
pub fn lint_vars(text: &str) -> Result<Vec<VarWarning>, ParseError> {
    let mut warnings = Vec::new();
    traverse(
        text,
        |node| matches!(node, Node::Select(_) | Node::Plural(_)),
        |node, span| {
            if let Some(warning) = lint_node(node, span) {
                warnings.push(warning);
            }
        },
        TraverseOptions::builder()
            .recurse_into_visited(true)
            .capture_location(true)
            .build(),
    )?;
    tracing::debug!(warnings = warnings.len(), "linted message variables");
    Ok(warnings)
}

fn lint_node(node: &Node, span: Option<Span>) -> Option<VarWarning> {
    let (discriminant, kind) = match node {
        Node::Select(select) => (&select.value, "select"),
        Node::Plural(plural) => (&plural.value, "plural"),
        _ => return None,
    };
    let discriminant = discriminant.clone();

    if is_placeholder(node) {
        return None;
    }
    if discriminant == VAR_PREFIX || is_indexed(&discriminant) {
        return Some(if kind == "select" {
            VarWarning::OpaquePayloadShape { discriminant, span }
        } else {
            VarWarning::WrongArgumentKind {
                discriminant,
                kind,
                span,
            }
        });
    }
    if discriminant.starts_with(VAR_PREFIX) {
        return Some(VarWarning::MalformedDiscriminant { discriminant, span });
    }

    let suggestion = suggest(&discriminant)?;
    Some(VarWarning::SuspiciousDiscriminant {
        discriminant,
        suggestion,
        span,
    })
}

/// Suggest the placeholder `discriminant` was probably meant to be.
fn suggest(discriminant: &str) -> Option<String> {
    let base = discriminant.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &discriminant[base.len()..];
    if base.is_empty() || levenshtein(base, VAR_PREFIX) > 1 {
        return None;
    }
    Some(format!("{VAR_PREFIX}{digits}"))
}
