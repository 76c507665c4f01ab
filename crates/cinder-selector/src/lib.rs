//! Selector token model and serializer for the Cinder selector tools.
//!
//! # Scope
//!
//! This crate turns a parsed selector back into text:
//! - **Token model** ([§ 3 Selector Syntax and Structure](https://www.w3.org/TR/selectors-4/#syntax))
//!   - Combinators, including the non-standard parent (`<`) and the column (`||`) combinators
//!   - Universal, type, pseudo-element, pseudo-class and attribute tokens
//!   - Namespaced names and the three-state attribute case flag
//!   - A JSON form via `serde`
//!
//! - **Serializer**
//!   - Per-position escaping of names, quoted values and pseudo-class arguments
//!   - `#id` and `.class` shorthands when they are exact, bracketed form otherwise
//!   - Nested selector lists inside functional pseudo-classes
//!
//! Parsing and matching live elsewhere; the input is assumed to come from a
//! conforming parser.
//!
//! # Example
//!
//! ```
//! use cinder_selector::{
//!     AttributeAction, AttributeSelector, IgnoreCase, PseudoSelector, SelectorList, TagSelector,
//!     stringify,
//! };
//!
//! let not = PseudoSelector::new("not").with_selectors(vec![
//!     vec![AttributeSelector::class("a").into()],
//!     vec![AttributeSelector::id("b").into()],
//! ]);
//! let lang = AttributeSelector::new("lang", AttributeAction::Hyphen, "en")
//!     .with_ignore_case(IgnoreCase::Sensitive);
//!
//! let list: SelectorList = vec![vec![TagSelector::new("p").into(), not.into(), lang.into()]];
//! assert_eq!(stringify(&list), r#"p:not(.a, #b)[lang|="en" s]"#);
//! ```

/// Internal error type.
pub mod error;
/// Backslash escaping and the character classes that drive it.
pub mod escape;
/// Namespace prefixes per [§ 5.3](https://www.w3.org/TR/selectors-4/#type-nmsp).
pub mod namespace;
/// Token trees to selector text.
pub mod stringify;
/// Selector tokens per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod types;

// Re-exports for convenience
pub use error::SelectorError;
pub use escape::{ATTRIBUTE_VALUE_CHARS, CharClass, NAME_CHARS, PSEUDO_VALUE_CHARS, escape_name};
pub use namespace::{ANY_NAMESPACE, format_namespace};
pub use stringify::{stringify, stringify_sequence, stringify_token};
pub use types::{
    AttributeAction, AttributeSelector, IgnoreCase, PseudoData, PseudoElementSelector,
    PseudoSelector, Selector, SelectorList, SelectorType, TagSelector, UniversalSelector,
};
