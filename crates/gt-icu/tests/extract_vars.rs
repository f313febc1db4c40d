//! Tests for harvesting placeholder values.

use gt_icu::{DeclareOptions, declare_var, extract_var_names, extract_vars, index_vars, vars};

const NEAR_MISSES: [&str; 7] = [
    "{_gt_1x, select, other {a}}",
    "{_gt_user, select, other {a}}",
    "{gt_1, select, other {a}}",
    "{_gt_, select, other {a {b}}}",
    "{_gt_, select, other {<b>a</b>}}",
    "{_gt_, plural, other {x}}",
    "{_gt_}",
];

#[test]
fn extracts_single_value() {
    assert_eq!(
        extract_vars("Hello {_gt_, select, other {World}}").unwrap(),
        vars! { "_gt_1" => "World" }
    );
}

#[test]
fn keys_follow_document_order() {
    let text = "{n, plural, one {{_gt_, select, other {A}}} other {<b>{_gt_, select, other {B}}</b>}} \
                {_gt_, select, other {C}}";
    assert_eq!(
        extract_vars(text).unwrap(),
        vars! { "_gt_1" => "A", "_gt_2" => "B", "_gt_3" => "C" }
    );
}

#[test]
fn keys_line_up_with_index_vars() {
    let text = "{_gt_, select, other {first}} {_gt_1x, select, other {skip}} \
                {_gt_, select, other {second}}";
    let vars = extract_vars(text).unwrap();
    let template = index_vars(text).unwrap();

    assert_eq!(vars, vars! { "_gt_1" => "first", "_gt_2" => "second" });
    assert_eq!(
        template,
        "{_gt_1, select, other {}} {_gt_1x, select, other {skip}} {_gt_2, select, other {}}"
    );
}

#[test]
fn values_are_unescaped() {
    let text = "{_gt_, select, other {it''s '{'x'}'}}";
    assert_eq!(extract_vars(text).unwrap()["_gt_1"], "it's {x}");
}

#[test]
fn empty_payload_is_extracted() {
    assert_eq!(
        extract_vars("{_gt_, select, other {}}").unwrap(),
        vars! { "_gt_1" => "" }
    );
}

#[test]
fn indexed_placeholders_are_skipped() {
    assert!(extract_vars("{_gt_1, select, other {x}}").unwrap().is_empty());
}

#[test]
fn text_without_placeholders_is_empty() {
    assert!(extract_vars("Hello {name}").unwrap().is_empty());
    assert!(extract_vars("").unwrap().is_empty());
}

#[test]
fn propagates_parse_errors() {
    assert!(extract_vars("{_gt_, select, other {x}").is_err());
}

#[test]
fn extracts_names_under_the_same_keys() {
    let named = DeclareOptions::builder().name("user").build();
    let text = format!(
        "{} {} {}",
        declare_var("Ana", &named),
        declare_var(3, &DeclareOptions::default()),
        declare_var("Paris", &DeclareOptions::builder().name("city").build()),
    );
    assert_eq!(
        extract_var_names(&text).unwrap(),
        vars! { "_gt_1" => "user", "_gt_3" => "city" }
    );
    assert_eq!(
        extract_vars(&text).unwrap(),
        vars! { "_gt_1" => "Ana", "_gt_2" => "3", "_gt_3" => "Paris" }
    );
}

#[test]
fn near_misses_are_not_extracted() {
    for text in NEAR_MISSES {
        assert!(extract_vars(text).unwrap().is_empty(), "text: {text}");
        assert!(extract_var_names(text).unwrap().is_empty(), "text: {text}");
    }
}

#[test]
fn near_misses_do_not_shift_keys() {
    let text = format!("{} {}", NEAR_MISSES.join(" "), "{_gt_, select, other {real}}");
    assert_eq!(extract_vars(&text).unwrap(), vars! { "_gt_1" => "real" });
}
