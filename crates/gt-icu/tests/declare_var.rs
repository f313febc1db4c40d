//! Tests for building placeholder fragments.

use gt_icu::{DeclareOptions, Message, Node, VarValue, declare_var, decode_vars, extract_vars};

fn plain() -> DeclareOptions {
    DeclareOptions::default()
}

#[test]
fn declares_plain_text() {
    assert_eq!(declare_var("John", &plain()), "{_gt_, select, other {John}}");
}

#[test]
fn declares_with_name() {
    let options = DeclareOptions::builder().name("user").build();
    assert_eq!(
        declare_var("John", &options),
        "{_gt_, select, other {John} _gt_var_name {user}}"
    );
}

#[test]
fn name_is_sanitized() {
    let options = DeclareOptions::builder().name("user's {id}").build();
    assert_eq!(
        declare_var("x", &options),
        "{_gt_, select, other {x} _gt_var_name {user''s '{id}'}}"
    );
}

#[test]
fn missing_values_declare_empty_text() {
    assert_eq!(declare_var(None::<&str>, &plain()), "{_gt_, select, other {}}");
    assert_eq!(declare_var(VarValue::Null, &plain()), "{_gt_, select, other {}}");
    assert_eq!(declare_var("", &plain()), "{_gt_, select, other {}}");
}

#[test]
fn non_string_values_use_their_display_form() {
    assert_eq!(declare_var(42, &plain()), "{_gt_, select, other {42}}");
    assert_eq!(declare_var(-7i64, &plain()), "{_gt_, select, other {-7}}");
    assert_eq!(declare_var(1.5, &plain()), "{_gt_, select, other {1.5}}");
    assert_eq!(declare_var(true, &plain()), "{_gt_, select, other {true}}");
    assert_eq!(declare_var(Some(3), &plain()), "{_gt_, select, other {3}}");
}

#[test]
fn syntax_characters_are_escaped() {
    assert_eq!(
        declare_var("{name} <b>", &plain()),
        "{_gt_, select, other {'{name} <b>'}}"
    );
    assert_eq!(declare_var("it's", &plain()), "{_gt_, select, other {it''s}}");
}

#[test]
fn fragment_parses_as_one_placeholder() {
    let fragment = declare_var("a {b} 'c' <d>", &plain());
    let message = Message::parse(&fragment).unwrap();
    let [Node::Select(select)] = message.nodes.as_slice() else {
        panic!("expected a single select, got {:?}", message.nodes);
    };
    assert_eq!(select.value, "_gt_");
    let other = select.case("other").unwrap();
    let [Node::Literal(literal)] = other.children.as_slice() else {
        panic!("expected a single literal, got {:?}", other.children);
    };
    assert_eq!(literal.value, "a {b} 'c' <d>");
}

#[test]
fn declared_values_survive_decode_and_extract() {
    let value = "50% off {today} only, it's <em>true</em>";
    let message = format!("Deal: {}!", declare_var(value, &plain()));

    assert_eq!(decode_vars(&message).unwrap(), format!("Deal: {value}!"));
    assert_eq!(extract_vars(&message).unwrap()["_gt_1"], value);
}
