//! Parse error types for ICU messages.

use thiserror::Error;

/// An error that occurred while parsing an ICU message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        /// Byte offset of the error in the message.
        offset: usize,
        message: String,
    },
}

impl ParseError {
    /// Build a syntax error positioned where `remaining` begins inside `original`.
    pub(crate) fn at(original: &str, remaining: &str, message: String) -> ParseError {
        let offset = original.len() - remaining.len();
        let (line, column) = calculate_position(original, offset);
        ParseError::Syntax {
            line,
            column,
            offset,
            message,
        }
    }

    /// Byte offset of the error in the message.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Syntax { offset, .. } => *offset,
        }
    }
}

/// Calculate line and column from original input and a byte offset into it.
fn calculate_position(original: &str, offset: usize) -> (usize, usize) {
    let consumed_str = &original[..offset];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed_str[pos + 1..].chars().count() + 1,
        None => consumed_str.chars().count() + 1,
    };
    (line, column)
}
