//! Integration tests for selector serialization.

use cinder_selector::{
    AttributeAction, AttributeSelector, IgnoreCase, PseudoElementSelector, PseudoSelector,
    Selector, TagSelector, UniversalSelector, format_namespace, stringify, stringify_sequence,
    stringify_token,
};

fn tag(name: &str) -> Selector {
    TagSelector::new(name).into()
}

fn class(value: &str) -> Selector {
    AttributeSelector::class(value).into()
}

fn id(value: &str) -> Selector {
    AttributeSelector::id(value).into()
}

fn attr(name: &str, action: AttributeAction, value: &str, ignore_case: IgnoreCase) -> Selector {
    AttributeSelector::new(name, action, value)
        .with_ignore_case(ignore_case)
        .into()
}

// List and Sequence Joining

#[test]
fn test_list_joins_with_comma_space() {
    assert_eq!(stringify(&[vec![tag("a")], vec![tag("b")]]), "a, b");
}

#[test]
fn test_sequence_with_child_combinator() {
    assert_eq!(stringify(&[vec![tag("a"), Selector::Child, tag("b")]]), "a > b");
}

#[test]
fn test_empty_list() {
    assert_eq!(stringify(&[]), "");
}

#[test]
fn test_empty_sequence_in_list() {
    assert_eq!(stringify(&[vec![], vec![tag("tag")]]), ", tag");
    assert_eq!(stringify(&[vec![tag("a")], vec![]]), "a, ");
}

#[test]
fn test_list_order_is_preserved() {
    let list = vec![vec![tag("c")], vec![tag("a")], vec![tag("b")]];
    assert_eq!(stringify(&list), "c, a, b");
}

#[test]
fn test_stringify_sequence_has_no_separator() {
    let tokens = vec![tag("div"), class("a"), id("b"), Selector::Descendant, tag("p")];
    assert_eq!(stringify_sequence(&tokens), "div.a#b p");
}

// Combinators
// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

#[test]
fn test_combinator_literals() {
    let cases = [
        (Selector::Child, " > "),
        (Selector::Parent, " < "),
        (Selector::Sibling, " ~ "),
        (Selector::Adjacent, " + "),
        (Selector::Descendant, " "),
        (Selector::ColumnCombinator, " || "),
    ];
    for (token, expected) in cases {
        assert_eq!(stringify_token(&token), expected);
    }
}

#[test]
fn test_complex_selector() {
    let list = vec![vec![
        tag("div"),
        Selector::Descendant,
        tag("ul"),
        Selector::Adjacent,
        tag("li"),
        Selector::Sibling,
        class("x"),
        Selector::ColumnCombinator,
        tag("td"),
    ]];
    assert_eq!(stringify(&list), "div ul + li ~ .x || td");
}

// Namespaces
// [§ 5.3 Namespaces in Elemental Selectors](https://www.w3.org/TR/selectors-4/#type-nmsp)

#[test]
fn test_format_namespace() {
    assert_eq!(format_namespace(None), "");
    assert_eq!(format_namespace(Some("*")), "*|");
    assert_eq!(format_namespace(Some("svg")), "svg|");
    assert_eq!(format_namespace(Some("a*b")), r"a\*b|");
}

#[test]
fn test_tag_namespace_wildcard() {
    let token: Selector = TagSelector::new("div").with_namespace("*").into();
    assert_eq!(stringify_token(&token), "*|div");
    assert_eq!(stringify_token(&tag("div")), "div");
}

#[test]
fn test_tag_with_named_namespace() {
    let token: Selector = TagSelector::new("circle").with_namespace("svg").into();
    assert_eq!(stringify_token(&token), "svg|circle");
}

#[test]
fn test_universal() {
    let bare: Selector = UniversalSelector::default().into();
    let any: Selector = UniversalSelector {
        namespace: Some("*".to_string()),
    }
    .into();
    let named: Selector = UniversalSelector {
        namespace: Some("my ns".to_string()),
    }
    .into();
    assert_eq!(stringify_token(&bare), "*");
    assert_eq!(stringify_token(&any), "*|*");
    assert_eq!(stringify_token(&named), r"my\ ns|*");
}

// Names

#[test]
fn test_tag_name_escaping() {
    assert_eq!(stringify_token(&tag("a.b")), r"a\.b");
    assert_eq!(stringify_token(&tag("x:y")), r"x\:y");
    assert_eq!(stringify_token(&tag("my-element")), "my-element");
}

#[test]
fn test_pseudo_element() {
    let token: Selector = PseudoElementSelector::new("before").into();
    assert_eq!(stringify_token(&token), "::before");

    let escaped: Selector = PseudoElementSelector::new("a(b)").into();
    assert_eq!(stringify_token(&escaped), r"::a\(b\)");
}

// Pseudo-classes
// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)

#[test]
fn test_pseudo_without_data() {
    let token: Selector = PseudoSelector::new("hover").into();
    assert_eq!(stringify_token(&token), ":hover");
}

#[test]
fn test_pseudo_with_argument() {
    let token: Selector = PseudoSelector::new("nth-child").with_argument("2n+1").into();
    assert_eq!(stringify_token(&token), ":nth-child(2n+1)");
}

#[test]
fn test_pseudo_argument_escaping() {
    // Pseudo-value class escapes parens and quotes but not name characters
    let token: Selector = PseudoSelector::new("contains")
        .with_argument(r#"a (b) "c" \ d.e"#)
        .into();
    assert_eq!(stringify_token(&token), r#":contains(a \(b\) \"c\" \\ d.e)"#);
}

#[test]
fn test_nested_pseudo() {
    let token: Selector = PseudoSelector::new("not")
        .with_selectors(vec![vec![class("a")], vec![id("b")]])
        .into();
    assert_eq!(stringify_token(&token), ":not(.a, #b)");
}

#[test]
fn test_deeply_nested_pseudo() {
    let inner: Selector = PseudoSelector::new("is")
        .with_selectors(vec![vec![tag("a"), Selector::Child, tag("b")]])
        .into();
    let outer: Selector = PseudoSelector::new("not")
        .with_selectors(vec![vec![inner], vec![PseudoSelector::new("hover").into()]])
        .into();
    assert_eq!(stringify(&[vec![tag("div"), outer]]), "div:not(:is(a > b), :hover)");
}

// Attributes
// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)

#[test]
fn test_id_shorthand() {
    assert_eq!(stringify_token(&id("x")), "#x");
}

#[test]
fn test_id_with_case_flag_keeps_brackets() {
    let insensitive = attr("id", AttributeAction::Equals, "x", IgnoreCase::Insensitive);
    let sensitive = attr("id", AttributeAction::Equals, "x", IgnoreCase::Sensitive);
    assert_eq!(stringify_token(&insensitive), r#"[id="x" i]"#);
    assert_eq!(stringify_token(&sensitive), r#"[id="x" s]"#);
}

#[test]
fn test_class_shorthand() {
    assert_eq!(stringify_token(&class("btn")), ".btn");
}

#[test]
fn test_class_with_case_flag_keeps_brackets() {
    let token = attr("class", AttributeAction::Element, "btn", IgnoreCase::Insensitive);
    assert_eq!(stringify_token(&token), r#"[class~="btn" i]"#);
}

#[test]
fn test_namespaced_shorthand_candidates_keep_brackets() {
    let id_token: Selector = AttributeSelector::id("x").with_namespace("html").into();
    let class_token: Selector = AttributeSelector::class("y").with_namespace("*").into();
    assert_eq!(stringify_token(&id_token), r#"[html|id="x"]"#);
    assert_eq!(stringify_token(&class_token), r#"[*|class~="y"]"#);
}

#[test]
fn test_shorthand_requires_matching_action() {
    let id_element = attr("id", AttributeAction::Element, "x", IgnoreCase::Quirks);
    let class_equals = attr("class", AttributeAction::Equals, "y", IgnoreCase::Quirks);
    assert_eq!(stringify_token(&id_element), r#"[id~="x"]"#);
    assert_eq!(stringify_token(&class_equals), r#"[class="y"]"#);
}

#[test]
fn test_shorthand_value_uses_name_escaping() {
    assert_eq!(stringify_token(&id("a.b")), r"#a\.b");
    assert_eq!(stringify_token(&class("x y")), r".x\ y");
}

#[test]
fn test_attribute_action_symbols() {
    let cases = [
        (AttributeAction::Equals, r#"[data-x="v"]"#),
        (AttributeAction::Element, r#"[data-x~="v"]"#),
        (AttributeAction::Start, r#"[data-x^="v"]"#),
        (AttributeAction::End, r#"[data-x$="v"]"#),
        (AttributeAction::Any, r#"[data-x*="v"]"#),
        (AttributeAction::Not, r#"[data-x!="v"]"#),
        (AttributeAction::Hyphen, r#"[data-x|="v"]"#),
        (AttributeAction::Exists, "[data-x]"),
    ];
    for (action, expected) in cases {
        let token = attr("data-x", action, "v", IgnoreCase::Quirks);
        assert_eq!(stringify_token(&token), expected, "action {action}");
    }
}

#[test]
fn test_hyphen_case_sensitive() {
    let token = attr("lang", AttributeAction::Hyphen, "en", IgnoreCase::Sensitive);
    assert_eq!(stringify_token(&token), r#"[lang|="en" s]"#);
}

#[test]
fn test_attribute_value_escaping() {
    // Only quote and backslash are escaped inside quotes
    let token = attr(
        "title",
        AttributeAction::Equals,
        r#"say "hi" (a.b) \ c"#,
        IgnoreCase::Quirks,
    );
    assert_eq!(stringify_token(&token), r#"[title="say \"hi\" (a.b) \\ c"]"#);
}

#[test]
fn test_attribute_name_escaping() {
    let token = attr("a[b]", AttributeAction::Exists, "", IgnoreCase::Quirks);
    assert_eq!(stringify_token(&token), r"[a\[b\]]");
}

#[test]
fn test_namespaced_attribute() {
    let token: Selector = AttributeSelector::new("href", AttributeAction::Start, "https")
        .with_namespace("xlink")
        .with_ignore_case(IgnoreCase::Insensitive)
        .into();
    assert_eq!(stringify_token(&token), r#"[xlink|href^="https" i]"#);
}

#[test]
fn test_exists_with_namespace() {
    let token: Selector = AttributeSelector::exists("lang").with_namespace("*").into();
    assert_eq!(stringify_token(&token), "[*|lang]");
}

// Display

#[test]
fn test_display_matches_stringify_token() {
    let tokens = [
        tag("div"),
        Selector::Child,
        class("a"),
        attr("lang", AttributeAction::Hyphen, "en", IgnoreCase::Insensitive),
        PseudoSelector::new("not").with_selectors(vec![vec![id("x")]]).into(),
    ];
    for token in &tokens {
        assert_eq!(token.to_string(), stringify_token(token));
    }
}
