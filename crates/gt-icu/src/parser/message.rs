//! ICU MessageFormat parser using winnow.
//!
//! Parses message strings into an AST. Handles:
//! - Literal text with apostrophe quoting (`''`, `'{...}'`)
//! - Simple arguments and `number`/`date`/`time` arguments with styles
//! - `select`, `plural` and `selectordinal` with their cases
//! - `#` inside plural cases
//! - Rich-text tags (`<b>...</b>`)
//!
//! Every node records the byte span it was parsed from.

use super::ast::*;
use super::error::ParseError;
use winnow::ascii::dec_int;
use winnow::combinator::{alt, cut_err, delimited, fail, opt, preceded};
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, take_while};

/// Case label every select and plural must carry.
const OTHER: &str = "other";

/// Deepest nesting of cases and tags accepted before parsing fails.
pub const MAX_DEPTH: usize = 128;

/// Parse an ICU message into an AST.
pub fn parse_message(input: &str) -> Result<Message, ParseError> {
    let mut remaining = input;
    match nodes(&mut remaining, Cx::root(input.len())) {
        Ok(nodes) => {
            if remaining.is_empty() {
                Ok(Message::new(input, nodes))
            } else {
                Err(ParseError::at(
                    input,
                    remaining,
                    format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                ))
            }
        }
        Err(e) => Err(ParseError::at(input, remaining, describe(e))),
    }
}

fn describe(error: ErrMode<ContextError>) -> String {
    match error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => {
            let text = e.to_string();
            if text.is_empty() {
                "invalid message".to_string()
            } else {
                text.replace('\n', ", ")
            }
        }
        ErrMode::Incomplete(_) => "unexpected end of input".to_string(),
    }
}

/// What kind of argument encloses the text being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parent {
    Text,
    Select,
    Plural,
}

/// Parser state threaded through the recursive descent.
#[derive(Debug, Clone, Copy)]
struct Cx {
    /// Length of the whole message, used to turn remaining input into offsets.
    len: usize,
    depth: usize,
    parent: Parent,
    in_tag: bool,
}

impl Cx {
    fn root(len: usize) -> Cx {
        Cx {
            len,
            depth: 0,
            parent: Parent::Text,
            in_tag: false,
        }
    }

    fn offset(&self, input: &str) -> usize {
        self.len - input.len()
    }

    fn span_from(&self, start: usize, input: &str) -> Option<Span> {
        Some(Span::new(start, self.offset(input)))
    }

    fn case(self, parent: Parent) -> Cx {
        Cx {
            depth: self.depth + 1,
            parent,
            ..self
        }
    }

    fn tag(self) -> Cx {
        Cx {
            depth: self.depth + 1,
            in_tag: true,
            ..self
        }
    }

    fn in_plural(&self) -> bool {
        self.parent == Parent::Plural
    }

    /// Characters that an apostrophe quotes when it directly precedes them.
    fn is_quotable(&self, c: char) -> bool {
        matches!(c, '{' | '}' | '<' | '>') || (c == '#' && self.in_plural())
    }

    /// Whether the input starts with something other than literal text.
    fn at_boundary(&self, input: &str) -> bool {
        let mut chars = input.chars();
        match chars.next() {
            Some('{') => true,
            Some('}') => self.depth > 0,
            Some('#') => self.in_plural(),
            Some('<') => matches!(chars.next(), Some(c) if c == '/' || c.is_ascii_alphabetic()),
            _ => false,
        }
    }
}

/// Fail without backtracking, labelling the failure.
fn reject<T>(input: &mut &str, label: &'static str) -> ModalResult<T> {
    cut_err(fail.context(StrContext::Label(label))).parse_next(input)
}

/// Parse a sequence of nodes until the end of input or the end of the
/// enclosing case or tag.
fn nodes(input: &mut &str, cx: Cx) -> ModalResult<Vec<Node>> {
    if cx.depth > MAX_DEPTH {
        return reject(input, "nesting too deep");
    }
    let mut nodes: Vec<Node> = Vec::new();

    while let Some(c) = input.chars().next() {
        let node = match c {
            '{' => argument(input, cx)?,
            '}' if cx.depth > 0 => break,
            '#' if cx.in_plural() => pound(input, cx)?,
            '<' if input[1..].starts_with('/') => {
                if cx.in_tag {
                    break;
                }
                return reject(input, "closing tag without an opening tag");
            }
            '<' if cx.at_boundary(input) => tag(input, cx)?,
            _ => literal(input, cx)?,
        };
        push_node(&mut nodes, node);
    }

    Ok(nodes)
}

/// Push a node, merging it into a directly preceding literal.
fn push_node(nodes: &mut Vec<Node>, node: Node) {
    if let (Some(Node::Literal(prev)), Node::Literal(next)) = (nodes.last_mut(), &node) {
        if let (Some(a), Some(b)) = (prev.span, next.span) {
            if a.end == b.start {
                prev.value.push_str(&next.value);
                prev.span = Some(Span::new(a.start, b.end));
                return;
            }
        }
    }
    nodes.push(node);
}

/// Parse a run of literal text, resolving apostrophe quoting.
fn literal(input: &mut &str, cx: Cx) -> ModalResult<Node> {
    let start = cx.offset(input);
    let mut value = String::new();

    loop {
        let Some(c) = input.chars().next() else {
            break;
        };
        if cx.at_boundary(input) {
            break;
        }
        if c == '\'' {
            apostrophe(input, cx, &mut value)?;
        } else {
            value.push(any.parse_next(input)?);
        }
    }

    Ok(Node::Literal(Literal {
        value,
        span: cx.span_from(start, input),
    }))
}

/// Parse an apostrophe: an escaped quote, a quoted run, or a literal `'`.
fn apostrophe(input: &mut &str, cx: Cx, value: &mut String) -> ModalResult<()> {
    '\''.parse_next(input)?;
    match input.chars().next() {
        Some('\'') => {
            '\''.parse_next(input)?;
            value.push('\'');
        }
        Some(c) if cx.is_quotable(c) => quoted_run(input, value)?,
        _ => value.push('\''),
    }
    Ok(())
}

/// Parse the inside of a quoted run up to its closing apostrophe.
///
/// An unterminated run extends to the end of the input.
fn quoted_run(input: &mut &str, value: &mut String) -> ModalResult<()> {
    while let Some(c) = opt(any).parse_next(input)? {
        if c != '\'' {
            value.push(c);
        } else if input.starts_with('\'') {
            '\''.parse_next(input)?;
            value.push('\'');
        } else {
            break;
        }
    }
    Ok(())
}

/// Parse `#` inside a plural case.
fn pound(input: &mut &str, cx: Cx) -> ModalResult<Node> {
    let start = cx.offset(input);
    '#'.parse_next(input)?;
    Ok(Node::Pound(Pound {
        span: cx.span_from(start, input),
    }))
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., char::is_whitespace)
        .void()
        .parse_next(input)
}

/// Parse an argument, select or plural name.
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_identifier_char).parse_next(input)
}

/// Identifiers stop at whitespace and ASCII syntax characters.
fn is_identifier_char(c: char) -> bool {
    c == '_' || !(c.is_whitespace() || c.is_ascii_punctuation())
}

fn close_brace(input: &mut &str) -> ModalResult<char> {
    cut_err('}')
        .context(StrContext::Expected(StrContextValue::CharLiteral('}')))
        .parse_next(input)
}

fn comma(input: &mut &str) -> ModalResult<()> {
    cut_err((ws, ','))
        .context(StrContext::Expected(StrContextValue::CharLiteral(',')))
        .void()
        .parse_next(input)
}

/// Parse anything in braces: `{name}`, `{name, type, ...}`.
fn argument(input: &mut &str, cx: Cx) -> ModalResult<Node> {
    let start = cx.offset(input);
    '{'.parse_next(input)?;
    ws(input)?;
    let value = cut_err(identifier)
        .context(StrContext::Label("argument name"))
        .parse_next(input)?
        .to_string();
    ws(input)?;

    if opt('}').parse_next(input)?.is_some() {
        return Ok(Node::Argument(Argument {
            value,
            span: cx.span_from(start, input),
        }));
    }

    comma(input)?;
    ws(input)?;
    let kind = cut_err(identifier)
        .context(StrContext::Label("argument type"))
        .parse_next(input)?;
    ws(input)?;

    match kind {
        "number" | "date" | "time" => {
            let style = opt(preceded((',', ws), argument_style)).parse_next(input)?;
            close_brace(input)?;
            let formatted = Formatted {
                value,
                style,
                span: cx.span_from(start, input),
            };
            Ok(match kind {
                "number" => Node::Number(formatted),
                "date" => Node::Date(formatted),
                _ => Node::Time(formatted),
            })
        }
        "select" => {
            comma(input)?;
            let options = cases(input, cx, Parent::Select)?;
            close_brace(input)?;
            Ok(Node::Select(Select {
                value,
                options,
                span: cx.span_from(start, input),
            }))
        }
        "plural" | "selectordinal" => {
            comma(input)?;
            ws(input)?;
            let offset = opt(delimited(("offset", ws, ':', ws), cut_err(dec_int), ws))
                .parse_next(input)?
                .unwrap_or(0);
            let options = cases(input, cx, Parent::Plural)?;
            close_brace(input)?;
            Ok(Node::Plural(Plural {
                value,
                kind: if kind == "plural" {
                    PluralKind::Cardinal
                } else {
                    PluralKind::Ordinal
                },
                offset,
                options,
                span: cx.span_from(start, input),
            }))
        }
        _ => reject(input, "argument type"),
    }
}

/// Parse the raw style of a `number`/`date`/`time` argument, up to the
/// argument's closing brace. Nested braces and quoted runs are kept as-is.
fn argument_style(input: &mut &str) -> ModalResult<String> {
    let mut style = String::new();
    let mut depth = 0usize;

    loop {
        match input.chars().next() {
            None => break,
            Some('}') if depth == 0 => break,
            Some(_) => {}
        }
        let c = any.parse_next(input)?;
        style.push(c);
        match c {
            '{' => depth += 1,
            '}' => depth -= 1,
            '\'' => {
                let quoted = take_while(0.., |c: char| c != '\'').parse_next(input)?;
                style.push_str(quoted);
                if let Some(close) = opt('\'').parse_next(input)? {
                    style.push(close);
                }
            }
            _ => {}
        }
    }

    let style = style.trim_end();
    if style.is_empty() {
        return reject(input, "argument style");
    }
    Ok(style.to_string())
}

/// Parse the cases of a select or plural.
fn cases(input: &mut &str, cx: Cx, parent: Parent) -> ModalResult<Vec<Case>> {
    let mut cases: Vec<Case> = Vec::new();

    loop {
        ws(input)?;
        if input.is_empty() || input.starts_with('}') {
            break;
        }

        let label = match parent {
            Parent::Plural => cut_err(alt((exact_label, identifier)))
                .context(StrContext::Label("case selector"))
                .parse_next(input)?,
            _ => cut_err(identifier)
                .context(StrContext::Label("case selector"))
                .parse_next(input)?,
        };
        if cases.iter().any(|case| case.label == label) {
            return reject(input, "duplicate case selector");
        }
        ws(input)?;
        cut_err('{')
            .context(StrContext::Expected(StrContextValue::CharLiteral('{')))
            .parse_next(input)?;
        let content_start = cx.offset(input);
        let children = nodes(input, cx.case(parent))?;
        let content = cx.span_from(content_start, input);
        close_brace(input)?;

        cases.push(Case {
            label: label.to_string(),
            children,
            content,
        });
    }

    if !cases.iter().any(|case| case.label == OTHER) {
        return reject(input, "case list without an `other` case");
    }
    Ok(cases)
}

/// Parse an exact-match plural label such as `=0`.
fn exact_label<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    ('=', take_while(1.., |c: char| c.is_ascii_digit() || c == '.' || c == '-'))
        .take()
        .parse_next(input)
}

/// Parse a tag. Self-closing tags are literal text.
fn tag(input: &mut &str, cx: Cx) -> ModalResult<Node> {
    let start = cx.offset(input);
    '<'.parse_next(input)?;
    let name = tag_name(input)?;
    ws(input)?;

    if opt("/>").parse_next(input)?.is_some() {
        return Ok(Node::Literal(Literal {
            value: format!("<{name}/>"),
            span: cx.span_from(start, input),
        }));
    }

    cut_err('>')
        .context(StrContext::Label("opening tag"))
        .parse_next(input)?;
    let content_start = cx.offset(input);
    let children = nodes(input, cx.tag())?;
    let content = cx.span_from(content_start, input);
    let closing = cut_err(delimited("</", tag_name, (ws, '>')))
        .context(StrContext::Label("closing tag"))
        .parse_next(input)?;
    if closing != name {
        return reject(input, "closing tag name");
    }

    Ok(Node::Tag(Tag {
        name: name.to_string(),
        children,
        content,
        span: cx.span_from(start, input),
    }))
}

fn tag_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| {
        c.is_alphanumeric() || matches!(c, '-' | '.' | '_')
    })
    .parse_next(input)
}
