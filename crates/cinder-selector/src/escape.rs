//! Backslash escaping for selector names and values.
//!
//! Escapes are a blind `\` prefix before each offending character, never a
//! numeric `\XX ` escape: `a.b` becomes `a\.b`.

use std::borrow::Cow;

/// A fixed set of characters that must be escaped in some position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClass(&'static [char]);

impl CharClass {
    /// Build a class from its members.
    #[must_use]
    pub const fn new(chars: &'static [char]) -> Self {
        Self(chars)
    }

    /// Whether `c` needs a backslash in this position.
    #[must_use]
    pub fn contains(self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// The members of this class.
    #[must_use]
    pub const fn chars(self) -> &'static [char] {
        self.0
    }
}

/// Characters escaped inside a double-quoted attribute value.
pub const ATTRIBUTE_VALUE_CHARS: CharClass = CharClass::new(&['\\', '"']);

/// Characters escaped inside a string argument of a functional pseudo-class.
pub const PSEUDO_VALUE_CHARS: CharClass = CharClass::new(&['\\', '"', '(', ')']);

/// Characters escaped in unquoted identifiers: tag, attribute, pseudo and
/// namespace names, and the values of `#id` and `.class` shorthands.
pub const NAME_CHARS: CharClass = CharClass::new(&[
    '\\', '"', '(', ')', '~', '^', '$', '*', '+', '!', '|', ':', '[', ']', ' ', '.',
]);

/// Escape every character of `text` that belongs to `class`.
///
/// Returns `text` borrowed when nothing needed escaping.
///
/// # Example
/// ```
/// use cinder_selector::escape::{NAME_CHARS, escape_name};
///
/// assert_eq!(escape_name("a.b c", NAME_CHARS), r"a\.b\ c");
/// ```
#[must_use]
pub fn escape_name(text: &str, class: CharClass) -> Cow<'_, str> {
    let mut escaped = String::new();
    let mut last = 0;

    for (index, c) in text.char_indices() {
        if class.contains(c) {
            // Copy the untouched run in one go
            escaped.push_str(&text[last..index]);
            escaped.push('\\');
            escaped.push(c);
            last = index + c.len_utf8();
        }
    }

    if escaped.is_empty() {
        return Cow::Borrowed(text);
    }
    escaped.push_str(&text[last..]);
    Cow::Owned(escaped)
}

/// Append `text` to `out`, escaped for `class`.
pub(crate) fn push_escaped(out: &mut String, text: &str, class: CharClass) {
    out.push_str(&escape_name(text, class));
}
