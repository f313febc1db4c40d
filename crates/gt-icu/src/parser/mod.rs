//! ICU MessageFormat parser and printer.
//!
//! The parser produces an AST whose nodes remember their source spans. The
//! printer reuses those spans, so a message reprints byte-for-byte except for
//! the nodes a caller rewrote.

pub mod ast;
pub mod error;
mod message;
mod printer;

pub use ast::*;
pub use error::ParseError;
pub use message::{MAX_DEPTH, parse_message};
pub use printer::{escape_literal, print_message, print_nodes};
