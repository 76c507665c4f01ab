//! [§ 5.3 Namespaces in Elemental Selectors](https://www.w3.org/TR/selectors-4/#type-nmsp)
//!
//! Namespace prefixes for type, universal and attribute selectors.

use crate::escape::{NAME_CHARS, push_escaped};

/// The wildcard namespace, written unescaped as `*|`.
pub const ANY_NAMESPACE: &str = "*";

/// Render the `ns|` prefix for a namespaced name.
///
/// - `None`: no prefix at all
/// - `Some("*")`: `*|`, any namespace
/// - `Some(ns)`: `ns|` with `ns` escaped like any other name
#[must_use]
pub fn format_namespace(namespace: Option<&str>) -> String {
    let mut out = String::new();
    push_namespace(&mut out, namespace);
    out
}

pub(crate) fn push_namespace(out: &mut String, namespace: Option<&str>) {
    let Some(namespace) = namespace else { return };

    if namespace == ANY_NAMESPACE {
        out.push_str(ANY_NAMESPACE);
    } else {
        push_escaped(out, namespace, NAME_CHARS);
    }
    out.push('|');
}

/// Prefix plus escaped local name, as in `svg|circle`.
pub(crate) fn push_namespaced_name(out: &mut String, namespace: Option<&str>, name: &str) {
    push_namespace(out, namespace);
    push_escaped(out, name, NAME_CHARS);
}
