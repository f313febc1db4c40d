//! Serializes ICU ASTs back to message text.

use super::ast::*;

/// Print a parsed message.
pub fn print_message(message: &Message) -> String {
    print_nodes(message.source(), &message.nodes)
}

/// Print `nodes` against the source they were parsed from.
///
/// A node with a span has its own syntax copied from `source` while its
/// children are printed recursively, so untouched text is reproduced
/// byte-for-byte around edited descendants. Nodes without a span are printed
/// in canonical form.
pub fn print_nodes(source: &str, nodes: &[Node]) -> String {
    let mut out = String::with_capacity(source.len());
    write_nodes(&mut out, source, nodes, false);
    out
}

/// Escape `value` so it parses back as a single literal with the same text.
///
/// Apostrophes are doubled, and the stretch from the first to the last
/// syntax character (`{`, `}`, `<`, `>`, plus `#` inside plurals) is wrapped
/// in one quoted run.
pub fn escape_literal(value: &str, in_plural: bool) -> String {
    let is_syntax = |c: char| matches!(c, '{' | '}' | '<' | '>') || (in_plural && c == '#');
    let doubled = value.replace('\'', "''");
    let (Some(first), Some(last)) = (doubled.find(is_syntax), doubled.rfind(is_syntax)) else {
        return doubled;
    };
    // Syntax characters are ASCII, so `last + 1` is a char boundary.
    let last = last + 1;
    let mut escaped = String::with_capacity(doubled.len() + 2);
    escaped.push_str(&doubled[..first]);
    escaped.push('\'');
    escaped.push_str(&doubled[first..last]);
    escaped.push('\'');
    escaped.push_str(&doubled[last..]);
    escaped
}

fn write_nodes(out: &mut String, source: &str, nodes: &[Node], in_plural: bool) {
    for node in nodes {
        write_node(out, source, node, in_plural);
    }
}

fn write_node(out: &mut String, source: &str, node: &Node, in_plural: bool) {
    if let Some(span) = node.span() {
        if let Some(regions) = content_regions(node, in_plural) {
            write_spliced(out, source, span, &regions);
            return;
        }
    }
    write_canonical(out, source, node, in_plural);
}

/// A span of the source whose text is replaced by printing `children`.
struct Region<'a> {
    content: Span,
    children: &'a [Node],
    in_plural: bool,
}

/// Regions of `node` that hold children, in source order. `None` if some
/// content span is missing and the node cannot be spliced.
fn content_regions(node: &Node, in_plural: bool) -> Option<Vec<Region<'_>>> {
    match node {
        Node::Select(select) => case_regions(&select.options, false),
        Node::Plural(plural) => case_regions(&plural.options, true),
        Node::Tag(tag) => Some(vec![Region {
            content: tag.content?,
            children: &tag.children,
            in_plural,
        }]),
        Node::Literal(_)
        | Node::Argument(_)
        | Node::Number(_)
        | Node::Date(_)
        | Node::Time(_)
        | Node::Pound(_) => Some(Vec::new()),
    }
}

fn case_regions(cases: &[Case], in_plural: bool) -> Option<Vec<Region<'_>>> {
    cases
        .iter()
        .map(|case| {
            Some(Region {
                content: case.content?,
                children: &case.children,
                in_plural,
            })
        })
        .collect()
}

fn write_spliced(out: &mut String, source: &str, span: Span, regions: &[Region<'_>]) {
    let mut cursor = span.start;
    for region in regions {
        out.push_str(source.get(cursor..region.content.start).unwrap_or_default());
        write_nodes(out, source, region.children, region.in_plural);
        cursor = region.content.end;
    }
    out.push_str(source.get(cursor..span.end).unwrap_or_default());
}

fn write_canonical(out: &mut String, source: &str, node: &Node, in_plural: bool) {
    match node {
        Node::Literal(literal) => out.push_str(&escape_literal(&literal.value, in_plural)),
        Node::Argument(argument) => {
            out.push('{');
            out.push_str(&argument.value);
            out.push('}');
        }
        Node::Number(formatted) => write_formatted(out, formatted, "number"),
        Node::Date(formatted) => write_formatted(out, formatted, "date"),
        Node::Time(formatted) => write_formatted(out, formatted, "time"),
        Node::Select(select) => {
            out.push('{');
            out.push_str(&select.value);
            out.push_str(", select, ");
            write_cases(out, source, &select.options, false);
            out.push('}');
        }
        Node::Plural(plural) => {
            out.push('{');
            out.push_str(&plural.value);
            out.push_str(match plural.kind {
                PluralKind::Cardinal => ", plural, ",
                PluralKind::Ordinal => ", selectordinal, ",
            });
            if plural.offset != 0 {
                out.push_str(&format!("offset:{} ", plural.offset));
            }
            write_cases(out, source, &plural.options, true);
            out.push('}');
        }
        Node::Pound(_) => out.push('#'),
        Node::Tag(tag) => {
            out.push('<');
            out.push_str(&tag.name);
            out.push('>');
            write_nodes(out, source, &tag.children, in_plural);
            out.push_str("</");
            out.push_str(&tag.name);
            out.push('>');
        }
    }
}

fn write_formatted(out: &mut String, formatted: &Formatted, kind: &str) {
    out.push('{');
    out.push_str(&formatted.value);
    out.push_str(", ");
    out.push_str(kind);
    if let Some(style) = &formatted.style {
        out.push_str(", ");
        out.push_str(style);
    }
    out.push('}');
}

fn write_cases(out: &mut String, source: &str, cases: &[Case], in_plural: bool) {
    for (i, case) in cases.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&case.label);
        out.push_str(" {");
        write_nodes(out, source, &case.children, in_plural);
        out.push('}');
    }
}
