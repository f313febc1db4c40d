//! Integration tests for ICU message parsing.

use gt_icu::parser::{
    Argument, Case, Literal, MAX_DEPTH, Node, ParseError, PluralKind, Span, parse_message,
};

fn literal(value: &str, start: usize, end: usize) -> Node {
    Node::Literal(Literal {
        value: value.into(),
        span: Some(Span::new(start, end)),
    })
}

fn only_node(text: &str) -> Node {
    let mut message = parse_message(text).unwrap();
    assert_eq!(message.nodes.len(), 1, "expected one node in {text:?}");
    message.nodes.remove(0)
}

fn case_labels(cases: &[Case]) -> Vec<&str> {
    cases.iter().map(|case| case.label.as_str()).collect()
}

// =============================================================================
// Literals
// =============================================================================

#[test]
fn test_pure_literal() {
    let m = parse_message("Hello, world!").unwrap();
    assert_eq!(m.nodes, vec![literal("Hello, world!", 0, 13)]);
}

#[test]
fn test_empty_string() {
    let m = parse_message("").unwrap();
    assert_eq!(m.nodes, vec![]);
}

#[test]
fn test_multiline_literal() {
    let m = parse_message("Line 1\nLine 2").unwrap();
    assert_eq!(m.nodes, vec![literal("Line 1\nLine 2", 0, 13)]);
}

#[test]
fn test_top_level_closing_brace_is_text() {
    let m = parse_message("a } b").unwrap();
    assert_eq!(m.nodes, vec![literal("a } b", 0, 5)]);
}

#[test]
fn test_pound_outside_plural_is_text() {
    let m = parse_message("#1 and #2").unwrap();
    assert_eq!(m.nodes, vec![literal("#1 and #2", 0, 9)]);
}

// =============================================================================
// Apostrophe quoting
// =============================================================================

#[test]
fn test_doubled_apostrophe() {
    let m = parse_message("It''s").unwrap();
    assert_eq!(m.nodes, vec![literal("It's", 0, 6)]);
}

#[test]
fn test_lone_apostrophe_is_text() {
    let m = parse_message("I'm here").unwrap();
    assert_eq!(m.nodes, vec![literal("I'm here", 0, 8)]);
}

#[test]
fn test_quoted_braces() {
    let m = parse_message("use '{name}' here").unwrap();
    assert_eq!(m.nodes, vec![literal("use {name} here", 0, 17)]);
}

#[test]
fn test_apostrophe_inside_quoted_run() {
    let m = parse_message("'{it''s}'").unwrap();
    assert_eq!(m.nodes, vec![literal("{it's}", 0, 9)]);
}

#[test]
fn test_unterminated_quote_runs_to_end() {
    let m = parse_message("a '{b").unwrap();
    assert_eq!(m.nodes, vec![literal("a {b", 0, 5)]);
}

#[test]
fn test_quoted_tag() {
    let m = parse_message("'<b>'x").unwrap();
    assert_eq!(m.nodes, vec![literal("<b>x", 0, 6)]);
}

// =============================================================================
// Arguments
// =============================================================================

#[test]
fn test_simple_argument() {
    let m = parse_message("Hello {name}!").unwrap();
    assert_eq!(
        m.nodes,
        vec![
            literal("Hello ", 0, 6),
            Node::Argument(Argument {
                value: "name".into(),
                span: Some(Span::new(6, 12)),
            }),
            literal("!", 12, 13),
        ]
    );
}

#[test]
fn test_argument_with_whitespace() {
    match only_node("{  name \n}") {
        Node::Argument(argument) => {
            assert_eq!(argument.value, "name");
            assert_eq!(argument.span, Some(Span::new(0, 10)));
        }
        other => panic!("expected argument, got {other:?}"),
    }
}

#[test]
fn test_number_without_style() {
    match only_node("{n, number}") {
        Node::Number(formatted) => {
            assert_eq!(formatted.value, "n");
            assert_eq!(formatted.style, None);
        }
        other => panic!("expected number, got {other:?}"),
    }
}

#[test]
fn test_number_with_style() {
    match only_node("{n, number, percent}") {
        Node::Number(formatted) => assert_eq!(formatted.style.as_deref(), Some("percent")),
        other => panic!("expected number, got {other:?}"),
    }
}

#[test]
fn test_number_with_skeleton() {
    match only_node("{n, number, ::currency/EUR}") {
        Node::Number(formatted) => {
            assert_eq!(formatted.style.as_deref(), Some("::currency/EUR"));
        }
        other => panic!("expected number, got {other:?}"),
    }
}

#[test]
fn test_date_and_time() {
    assert!(matches!(only_node("{d, date, short}"), Node::Date(_)));
    assert!(matches!(only_node("{t, time}"), Node::Time(_)));
}

// =============================================================================
// Select and plural
// =============================================================================

#[test]
fn test_select() {
    match only_node("{g, select, male {He} female {She} other {They}}") {
        Node::Select(select) => {
            assert_eq!(select.value, "g");
            assert_eq!(case_labels(&select.options), ["male", "female", "other"]);
            let other = select.case("other").unwrap();
            assert_eq!(other.children, vec![literal("They", 42, 46)]);
            assert_eq!(other.content, Some(Span::new(42, 46)));
        }
        other => panic!("expected select, got {other:?}"),
    }
}

#[test]
fn test_select_with_empty_case() {
    match only_node("{_gt_1, select, other {}}") {
        Node::Select(select) => {
            let other = select.case("other").unwrap();
            assert!(other.children.is_empty());
            assert_eq!(other.content, Some(Span::new(23, 23)));
        }
        other => panic!("expected select, got {other:?}"),
    }
}

#[test]
fn test_plural_with_pound() {
    match only_node("{count, plural, =0 {none} one {# item} other {# items}}") {
        Node::Plural(plural) => {
            assert_eq!(plural.kind, PluralKind::Cardinal);
            assert_eq!(plural.offset, 0);
            assert_eq!(case_labels(&plural.options), ["=0", "one", "other"]);
            let one = &plural.options[1];
            assert!(matches!(one.children[0], Node::Pound(_)));
            assert!(matches!(&one.children[1], Node::Literal(l) if l.value == " item"));
        }
        other => panic!("expected plural, got {other:?}"),
    }
}

#[test]
fn test_selectordinal_with_offset() {
    match only_node("{n, selectordinal, offset:1 one {#st} other {#th}}") {
        Node::Plural(plural) => {
            assert_eq!(plural.kind, PluralKind::Ordinal);
            assert_eq!(plural.offset, 1);
        }
        other => panic!("expected plural, got {other:?}"),
    }
}

#[test]
fn test_quoted_pound_in_plural() {
    match only_node("{n, plural, other {'#' #}}") {
        Node::Plural(plural) => {
            let children = &plural.options[0].children;
            assert!(matches!(&children[0], Node::Literal(l) if l.value == "# "));
            assert!(matches!(children[1], Node::Pound(_)));
        }
        other => panic!("expected plural, got {other:?}"),
    }
}

#[test]
fn test_pound_in_select_inside_plural_is_text() {
    match only_node("{n, plural, other {{g, select, other {#}}}}") {
        Node::Plural(plural) => match &plural.options[0].children[0] {
            Node::Select(select) => {
                let other = select.case("other").unwrap();
                assert!(matches!(&other.children[..], [Node::Literal(l)] if l.value == "#"));
            }
            other => panic!("expected select, got {other:?}"),
        },
        other => panic!("expected plural, got {other:?}"),
    }
}

// =============================================================================
// Tags
// =============================================================================

#[test]
fn test_tag() {
    match only_node("<b>bold {name}</b>") {
        Node::Tag(tag) => {
            assert_eq!(tag.name, "b");
            assert_eq!(tag.children.len(), 2);
            assert_eq!(tag.content, Some(Span::new(3, 14)));
            assert_eq!(tag.span, Some(Span::new(0, 18)));
        }
        other => panic!("expected tag, got {other:?}"),
    }
}

#[test]
fn test_self_closing_tag_is_text() {
    let m = parse_message("<br/> x").unwrap();
    assert_eq!(m.nodes, vec![literal("<br/> x", 0, 7)]);
}

#[test]
fn test_angle_bracket_without_tag_name_is_text() {
    let m = parse_message("1 < 2").unwrap();
    assert_eq!(m.nodes, vec![literal("1 < 2", 0, 5)]);
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_ast_serializes_with_type_tags() {
    let m = parse_message("{g, select, other {x}}").unwrap();
    let json = serde_json::to_value(&m).unwrap();
    assert_eq!(json["nodes"][0]["type"], "select");
    assert_eq!(json["nodes"][0]["options"][0]["label"], "other");
    assert_eq!(json["nodes"][0]["span"]["end"], 22);
    assert!(json.get("source").is_none());
}

// =============================================================================
// Errors
// =============================================================================

fn parse_err(text: &str) -> ParseError {
    match parse_message(text) {
        Ok(m) => panic!("expected error for {text:?}, got {:?}", m.nodes),
        Err(e) => e,
    }
}

#[test]
fn test_unclosed_argument() {
    let ParseError::Syntax { line, message, .. } = parse_err("Hello {name");
    assert_eq!(line, 1);
    assert!(!message.is_empty());
}

#[test]
fn test_error_line_number() {
    let ParseError::Syntax { line, .. } = parse_err("first line\n{oops");
    assert_eq!(line, 2);
}

#[test]
fn test_empty_argument() {
    parse_err("{}");
}

#[test]
fn test_unknown_argument_type() {
    parse_err("{x, foo}");
}

#[test]
fn test_select_without_other() {
    parse_err("{x, select, one {a}}");
}

#[test]
fn test_duplicate_case() {
    parse_err("{x, select, other {a} other {b}}");
}

#[test]
fn test_unclosed_select() {
    parse_err("{x, select, other {a}");
}

#[test]
fn test_mismatched_closing_tag() {
    parse_err("<b>text</i>");
}

#[test]
fn test_unmatched_closing_tag() {
    parse_err("text</b>");
}

#[test]
fn test_unclosed_tag() {
    parse_err("<b>text");
}

#[test]
fn test_error_display_includes_position() {
    let err = parse_err("{x, select, one {a}}");
    assert!(err.to_string().starts_with("syntax error at 1:"));
}

fn nested_tags(depth: usize) -> String {
    format!("{}x{}", "<b>".repeat(depth), "</b>".repeat(depth))
}

fn nested_selects(depth: usize) -> String {
    format!("{}x{}", "{a, select, other {".repeat(depth), "}}".repeat(depth))
}

#[test]
fn test_nesting_up_to_limit() {
    assert!(parse_message(&nested_tags(MAX_DEPTH)).is_ok());
    assert!(parse_message(&nested_selects(MAX_DEPTH)).is_ok());
}

#[test]
fn test_nesting_past_limit() {
    for text in [nested_tags(MAX_DEPTH + 1), nested_selects(MAX_DEPTH + 1)] {
        let ParseError::Syntax { message, .. } = parse_err(&text);
        assert!(message.contains("nesting too deep"), "message: {message}");
    }
}

#[test]
fn test_very_deep_nesting_is_an_error() {
    parse_err(&nested_tags(20_000));
    parse_err(&nested_selects(20_000));
}
