//! Public AST types for ICU MessageFormat messages.
//!
//! Every node produced by the parser carries the byte [`Span`] it was parsed
//! from, and every case and tag the span of its content. The printer copies
//! a node's own syntax from the message source and prints its children
//! recursively, so editing the children of a case or tag needs nothing else.
//! A node whose name, labels or case list changed must have its span cleared
//! so that it is printed in canonical form.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Range;

use serde::Serialize;

use super::error::ParseError;
use super::printer::print_message;

/// A byte range in the message source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Span {
        Span { start, end }
    }

    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// A parsed message together with the source text it was parsed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    #[serde(skip)]
    source: String,
    pub nodes: Vec<Node>,
}

impl Message {
    /// Parse `text` into a message.
    pub fn parse(text: &str) -> Result<Message, ParseError> {
        super::message::parse_message(text)
    }

    pub(crate) fn new(source: &str, nodes: Vec<Node>) -> Message {
        Message {
            source: source.to_string(),
            nodes,
        }
    }

    /// The text this message was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Serialize the message back to ICU text.
    pub fn print(&self) -> String {
        print_message(self)
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.print())
    }
}

/// A node in an ICU message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Plain text, already unescaped.
    Literal(Literal),
    /// A bare argument: `{name}`.
    Argument(Argument),
    /// `{name, number}` with an optional style.
    Number(Formatted),
    /// `{name, date}` with an optional style.
    Date(Formatted),
    /// `{name, time}` with an optional style.
    Time(Formatted),
    /// `{name, select, key {...} other {...}}`
    Select(Select),
    /// `{name, plural, ...}` or `{name, selectordinal, ...}`
    Plural(Plural),
    /// `#` directly inside a plural case.
    Pound(Pound),
    /// Rich-text wrapper: `<b>...</b>`.
    Tag(Tag),
}

impl Node {
    /// Source span of this node, or `None` if it was created or rewritten
    /// after parsing.
    pub fn span(&self) -> Option<Span> {
        match self {
            Node::Literal(n) => n.span,
            Node::Argument(n) => n.span,
            Node::Number(n) | Node::Date(n) | Node::Time(n) => n.span,
            Node::Select(n) => n.span,
            Node::Plural(n) => n.span,
            Node::Pound(n) => n.span,
            Node::Tag(n) => n.span,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Node::Select(select) => Some(select),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Literal {
    pub value: String,
    pub span: Option<Span>,
}

impl Literal {
    pub fn new(value: impl Into<String>) -> Literal {
        Literal {
            value: value.into(),
            span: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Argument {
    pub value: String,
    pub span: Option<Span>,
}

impl Argument {
    pub fn new(value: impl Into<String>) -> Argument {
        Argument {
            value: value.into(),
            span: None,
        }
    }
}

/// A `number`, `date` or `time` argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Formatted {
    pub value: String,
    /// Raw style text after the second comma (e.g. `percent`, `::currency/EUR`).
    pub style: Option<String>,
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Select {
    /// The discriminant name.
    pub value: String,
    pub options: Vec<Case>,
    pub span: Option<Span>,
}

impl Select {
    /// Find the case with the given label.
    pub fn case(&self, label: &str) -> Option<&Case> {
        self.options.iter().find(|case| case.label == label)
    }

    pub fn case_mut(&mut self, label: &str) -> Option<&mut Case> {
        self.options.iter_mut().find(|case| case.label == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralKind {
    Cardinal,
    Ordinal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plural {
    pub value: String,
    pub kind: PluralKind,
    pub offset: i64,
    pub options: Vec<Case>,
    pub span: Option<Span>,
}

/// One labelled branch of a select or plural.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Case {
    pub label: String,
    pub children: Vec<Node>,
    /// Span of the text between the case's braces.
    pub content: Option<Span>,
}

impl Case {
    pub fn new(label: impl Into<String>, children: Vec<Node>) -> Case {
        Case {
            label: label.into(),
            children,
            content: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pound {
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    pub name: String,
    pub children: Vec<Node>,
    /// Span of the text between the opening and closing tags.
    pub content: Option<Span>,
    pub span: Option<Span>,
}
