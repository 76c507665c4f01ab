//! Selector serialization.
//!
//! Turns a token tree back into selector text that parses to the same tree.
//! Everything renders into one growing buffer; nested `:not(...)`-style
//! lists recurse into the same buffer.

use std::fmt;

use cinder_common::warning::warn_once;

use crate::escape::{ATTRIBUTE_VALUE_CHARS, NAME_CHARS, PSEUDO_VALUE_CHARS, push_escaped};
use crate::namespace::{push_namespace, push_namespaced_name};
use crate::types::{
    AttributeAction, AttributeSelector, IgnoreCase, PseudoData, PseudoSelector, Selector,
};

/// Separator between the alternatives of a selector list.
const LIST_SEPARATOR: &str = ", ";

/// Turn a selector list back into a string.
///
/// # Example
/// ```
/// use cinder_selector::{AttributeSelector, Selector, SelectorList, TagSelector, stringify};
///
/// let list: SelectorList = vec![
///     vec![TagSelector::new("ul").into(), Selector::Child, TagSelector::new("li").into()],
///     vec![AttributeSelector::class("nav").into()],
/// ];
/// assert_eq!(stringify(&list), "ul > li, .nav");
/// ```
#[must_use]
pub fn stringify(selectors: &[Vec<Selector>]) -> String {
    let mut out = String::new();
    push_list(&mut out, selectors);
    out
}

/// Turn one complex selector back into a string.
///
/// Tokens are concatenated as-is; combinators carry their own spacing.
#[must_use]
pub fn stringify_sequence(tokens: &[Selector]) -> String {
    let mut out = String::new();
    push_sequence(&mut out, tokens);
    out
}

/// Turn a single token back into a string.
#[must_use]
pub fn stringify_token(token: &Selector) -> String {
    let mut out = String::new();
    push_token(&mut out, token);
    out
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify_token(self))
    }
}

fn push_list(out: &mut String, selectors: &[Vec<Selector>]) {
    for (index, sequence) in selectors.iter().enumerate() {
        if index > 0 {
            out.push_str(LIST_SEPARATOR);
        }
        if sequence.is_empty() {
            // Renders as nothing; parsers should never produce this
            let _ = warn_once(
                "Selector",
                &format!("empty selector sequence at index {index} of selector list"),
            );
        }
        push_sequence(out, sequence);
    }
}

fn push_sequence(out: &mut String, tokens: &[Selector]) {
    for token in tokens {
        push_token(out, token);
    }
}

fn push_token(out: &mut String, token: &Selector) {
    match token {
        // [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
        Selector::Child => out.push_str(" > "),
        Selector::Parent => out.push_str(" < "),
        Selector::Sibling => out.push_str(" ~ "),
        Selector::Adjacent => out.push_str(" + "),
        Selector::Descendant => out.push(' '),
        Selector::ColumnCombinator => out.push_str(" || "),

        Selector::Universal(universal) => {
            push_namespace(out, universal.namespace.as_deref());
            out.push('*');
        }
        Selector::Tag(tag) => push_namespaced_name(out, tag.namespace.as_deref(), &tag.name),
        Selector::PseudoElement(pseudo_element) => {
            out.push_str("::");
            push_escaped(out, &pseudo_element.name, NAME_CHARS);
        }
        Selector::Pseudo(pseudo) => push_pseudo(out, pseudo),
        Selector::Attribute(attribute) => push_attribute(out, attribute),
    }
}

/// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
fn push_pseudo(out: &mut String, pseudo: &PseudoSelector) {
    out.push(':');
    push_escaped(out, &pseudo.name, NAME_CHARS);

    match &pseudo.data {
        None => {}
        Some(PseudoData::Argument(argument)) => {
            out.push('(');
            push_escaped(out, argument, PSEUDO_VALUE_CHARS);
            out.push(')');
        }
        Some(PseudoData::Selectors(selectors)) => {
            out.push('(');
            push_list(out, selectors);
            out.push(')');
        }
    }
}

/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
fn push_attribute(out: &mut String, attribute: &AttributeSelector) {
    // STEP 1: Shorthand forms.
    //
    // [§ 6.6 Class selectors](https://www.w3.org/TR/selectors-4/#class-html)
    // [§ 6.7 ID selectors](https://www.w3.org/TR/selectors-4/#id-selectors)
    //
    // Only exact when there is no namespace and no case flag; anything else
    // would be lost on re-parse.
    if attribute.namespace.is_none() && attribute.ignore_case == IgnoreCase::Quirks {
        let prefix = match (attribute.name.as_str(), attribute.action) {
            ("id", AttributeAction::Equals) => Some('#'),
            ("class", AttributeAction::Element) => Some('.'),
            _ => None,
        };
        if let Some(prefix) = prefix {
            out.push(prefix);
            push_escaped(out, &attribute.value, NAME_CHARS);
            return;
        }
    }

    // STEP 2: Bracketed form.
    out.push('[');
    push_namespaced_name(out, attribute.namespace.as_deref(), &attribute.name);

    if attribute.action == AttributeAction::Exists {
        out.push(']');
        return;
    }

    let symbol = attribute
        .action
        .symbol()
        .unwrap_or_else(|err| unreachable!("{err}"));
    out.push_str(symbol);
    out.push_str("=\"");
    push_escaped(out, &attribute.value, ATTRIBUTE_VALUE_CHARS);
    out.push('"');
    out.push_str(attribute.ignore_case.suffix());
    out.push(']');
}
