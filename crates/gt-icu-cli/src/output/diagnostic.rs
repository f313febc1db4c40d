//! Miette diagnostic wrappers for message parse errors and lint warnings.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use gt_icu::{ParseError, Span, VarWarning};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for message parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(gt_icu::syntax))]
pub struct MessageDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,
}

impl MessageDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(name: &str, content: &str, err: &ParseError) -> Self {
        let ParseError::Syntax { message, .. } = err;

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = err.offset().min(content.len());
        let len = usize::from(offset < content.len());

        MessageDiagnostic {
            src: NamedSource::new(name, content.to_string()),
            span: (offset, len).into(),
            message: message.clone(),
        }
    }
}

/// A miette-compatible diagnostic for a suspicious placeholder.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(gt_icu::placeholder), severity(Warning))]
pub struct WarningDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("this argument")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl WarningDiagnostic {
    pub fn from_warning(name: &str, content: &str, warning: &VarWarning) -> Self {
        let span = warning.span().unwrap_or(Span::new(0, 0));
        let help = match warning {
            VarWarning::SuspiciousDiscriminant { suggestion, .. } => {
                Some(format!("rename the argument to `{suggestion}`"))
            }
            VarWarning::OpaquePayloadShape { .. } => {
                Some("declare the value with `gt-icu declare` so it is escaped".to_string())
            }
            VarWarning::WrongArgumentKind { .. } => {
                Some("placeholders are written `{_gt_, select, other {...}}`".to_string())
            }
            VarWarning::MalformedDiscriminant { .. } => None,
        };

        WarningDiagnostic {
            src: NamedSource::new(name, content.to_string()),
            span: (span.start, span.len()).into(),
            message: warning.to_string(),
            help,
        }
    }
}
