//! Selector token model.
//!
//! A selector is handed to the serializer as a flat token stream per complex
//! selector, the shape produced by streaming selector parsers: compound parts
//! and combinators appear in source order, so `div > .a` is
//! `[Tag(div), Child, Attribute(class ~= a)]`.
//!
//! The JSON form (via `serde`) is internally tagged on `"type"`:
//!
//! ```json
//! {"type": "attribute", "name": "lang", "action": "hyphen",
//!  "value": "en", "namespace": null, "ignoreCase": false}
//! ```

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::error::SelectorError;

/// A comma-separated selector list: each inner vector is one alternative.
pub type SelectorList = Vec<Vec<Selector>>;

/// [§ 3 Selector Syntax and Structure](https://www.w3.org/TR/selectors-4/#syntax)
///
/// One token of a complex selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Selector {
    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// Non-standard parent combinator, `A < B`: B is the parent of A.
    Parent,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    Sibling,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    Adjacent,

    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [Column combinator](https://www.w3.org/TR/selectors-4/#the-column-combinator)
    /// "The column combinator, which consists of two pipes (||) represents the
    /// relationship of a column element to a cell element belonging to the column"
    ColumnCombinator,

    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    ///
    /// Examples: `*`, `*|*`, `svg|*`
    Universal(UniversalSelector),

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `svg|circle`
    Tag(TagSelector),

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::selection`
    PseudoElement(PseudoElementSelector),

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:hover`, `:nth-child(2n+1)`, `:not(.a, #b)`
    Pseudo(PseudoSelector),

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Class and ID selectors are attribute tokens too: `.a` is
    /// `[class~="a"]` and `#b` is `[id="b"]`, both in quirks case mode.
    Attribute(AttributeSelector),
}

impl Selector {
    /// The kind of this token, without its payload.
    #[must_use]
    pub const fn kind(&self) -> SelectorType {
        match self {
            Self::Child => SelectorType::Child,
            Self::Parent => SelectorType::Parent,
            Self::Sibling => SelectorType::Sibling,
            Self::Adjacent => SelectorType::Adjacent,
            Self::Descendant => SelectorType::Descendant,
            Self::ColumnCombinator => SelectorType::ColumnCombinator,
            Self::Universal(_) => SelectorType::Universal,
            Self::Tag(_) => SelectorType::Tag,
            Self::PseudoElement(_) => SelectorType::PseudoElement,
            Self::Pseudo(_) => SelectorType::Pseudo,
            Self::Attribute(_) => SelectorType::Attribute,
        }
    }
}

/// Token kinds, named as they appear in the `"type"` field of the JSON form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum SelectorType {
    /// `A > B`
    Child,
    /// `A < B`
    Parent,
    /// `A ~ B`
    Sibling,
    /// `A + B`
    Adjacent,
    /// `A B`
    Descendant,
    /// `A || B`
    ColumnCombinator,
    /// `*`
    Universal,
    /// `div`
    Tag,
    /// `::before`
    PseudoElement,
    /// `:hover`
    Pseudo,
    /// `[attr]`, `.class`, `#id`
    Attribute,
}

impl SelectorType {
    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    ///
    /// Whether this kind moves matching to a related element (a combinator)
    /// rather than adding a condition on the current one.
    #[must_use]
    pub const fn is_traversal(self) -> bool {
        matches!(
            self,
            Self::Child
                | Self::Parent
                | Self::Sibling
                | Self::Adjacent
                | Self::Descendant
                | Self::ColumnCombinator
        )
    }
}

/// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversalSelector {
    /// [§ 5.3 Namespaces in Elemental Selectors](https://www.w3.org/TR/selectors-4/#type-nmsp)
    ///
    /// `None` for no prefix, `Some("*")` for any namespace.
    #[serde(default)]
    pub namespace: Option<String>,
}

/// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSelector {
    /// Element name.
    pub name: String,
    /// Namespace prefix; `Some("*")` is the wildcard namespace.
    #[serde(default)]
    pub namespace: Option<String>,
}

impl TagSelector {
    /// A type selector with no namespace prefix.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }

    /// Set the namespace prefix.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

/// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PseudoElementSelector {
    /// Pseudo-element name without the leading `::`.
    pub name: String,
}

impl PseudoElementSelector {
    /// A pseudo-element with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PseudoSelector {
    /// Pseudo-class name without the leading `:`.
    pub name: String,
    /// Functional argument, if any.
    #[serde(default)]
    pub data: Option<PseudoData>,
}

impl PseudoSelector {
    /// A non-functional pseudo-class, like `:hover`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: None,
        }
    }

    /// Attach a raw string argument, as in `:nth-child(2n+1)`.
    #[must_use]
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.data = Some(PseudoData::Argument(argument.into()));
        self
    }

    /// Attach a nested selector list, as in `:not(.a, #b)`.
    #[must_use]
    pub fn with_selectors(mut self, selectors: SelectorList) -> Self {
        self.data = Some(PseudoData::Selectors(selectors));
        self
    }
}

/// Argument of a functional pseudo-class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PseudoData {
    /// Raw text, kept verbatim apart from escaping.
    Argument(String),
    /// A nested selector list.
    Selectors(SelectorList),
}

/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSelector {
    /// Attribute name.
    pub name: String,
    /// How the attribute value is compared.
    pub action: AttributeAction,
    /// Value to compare against. Unused for [`AttributeAction::Exists`].
    #[serde(default)]
    pub value: String,
    /// [§ 6.4 Attribute selectors and namespaces](https://www.w3.org/TR/selectors-4/#attrnmsp)
    #[serde(default)]
    pub namespace: Option<String>,
    /// [§ 6.3 Case-sensitivity](https://www.w3.org/TR/selectors-4/#attribute-case)
    #[serde(rename = "ignoreCase", default)]
    pub ignore_case: IgnoreCase,
}

impl AttributeSelector {
    /// An attribute selector in quirks case mode with no namespace.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        action: AttributeAction,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            action,
            value: value.into(),
            namespace: None,
            ignore_case: IgnoreCase::Quirks,
        }
    }

    /// `[name]`
    #[must_use]
    pub fn exists(name: impl Into<String>) -> Self {
        Self::new(name, AttributeAction::Exists, String::new())
    }

    /// `#value`
    #[must_use]
    pub fn id(value: impl Into<String>) -> Self {
        Self::new("id", AttributeAction::Equals, value)
    }

    /// `.value`
    #[must_use]
    pub fn class(value: impl Into<String>) -> Self {
        Self::new("class", AttributeAction::Element, value)
    }

    /// Set the namespace prefix.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the case-sensitivity flag.
    #[must_use]
    pub const fn with_ignore_case(mut self, ignore_case: IgnoreCase) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

/// [§ 6.1 Attribute presence and value selectors](https://www.w3.org/TR/selectors-4/#attribute-representation)
/// [§ 6.2 Substring matching attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-substrings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AttributeAction {
    /// `[att=val]`
    Equals,
    /// `[att~=val]`, "a whitespace-separated list of words, one of which is
    /// exactly val"
    Element,
    /// `[att^=val]`
    Start,
    /// `[att$=val]`
    End,
    /// `[att*=val]`
    Any,
    /// `[att!=val]`, non-standard negation
    Not,
    /// `[att|=val]`, "either being exactly val or beginning with val
    /// immediately followed by -"
    Hyphen,
    /// `[att]`
    Exists,
}

impl AttributeAction {
    /// The operator written before `=` in the bracketed form.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::NoActionSymbol`] for
    /// [`AttributeAction::Exists`], which is written without an operator.
    pub const fn symbol(self) -> Result<&'static str, SelectorError> {
        match self {
            Self::Equals => Ok(""),
            Self::Element => Ok("~"),
            Self::Start => Ok("^"),
            Self::End => Ok("$"),
            Self::Any => Ok("*"),
            Self::Not => Ok("!"),
            Self::Hyphen => Ok("|"),
            Self::Exists => Err(SelectorError::NoActionSymbol(self)),
        }
    }
}

/// [§ 6.3 Case-sensitivity](https://www.w3.org/TR/selectors-4/#attribute-case)
///
/// JSON form: `true`, `false`, and `null` or `"quirks"` for [`IgnoreCase::Quirks`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "IgnoreCaseRepr", into = "IgnoreCaseRepr")]
pub enum IgnoreCase {
    /// Explicit `i` flag.
    Insensitive,
    /// Explicit `s` flag.
    Sensitive,
    /// No flag: the document language decides. Required for `#id` and
    /// `.class` shorthand.
    #[default]
    Quirks,
}

impl IgnoreCase {
    /// Text appended after the quoted value.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Insensitive => " i",
            Self::Sensitive => " s",
            Self::Quirks => "",
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum IgnoreCaseRepr {
    Flag(bool),
    Mode(QuirksMode),
    Unset,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum QuirksMode {
    Quirks,
}

impl From<IgnoreCaseRepr> for IgnoreCase {
    fn from(repr: IgnoreCaseRepr) -> Self {
        match repr {
            IgnoreCaseRepr::Flag(true) => Self::Insensitive,
            IgnoreCaseRepr::Flag(false) => Self::Sensitive,
            IgnoreCaseRepr::Mode(QuirksMode::Quirks) | IgnoreCaseRepr::Unset => Self::Quirks,
        }
    }
}

impl From<IgnoreCase> for IgnoreCaseRepr {
    fn from(ignore_case: IgnoreCase) -> Self {
        match ignore_case {
            IgnoreCase::Insensitive => Self::Flag(true),
            IgnoreCase::Sensitive => Self::Flag(false),
            IgnoreCase::Quirks => Self::Mode(QuirksMode::Quirks),
        }
    }
}

impl From<UniversalSelector> for Selector {
    fn from(selector: UniversalSelector) -> Self {
        Self::Universal(selector)
    }
}

impl From<TagSelector> for Selector {
    fn from(selector: TagSelector) -> Self {
        Self::Tag(selector)
    }
}

impl From<PseudoElementSelector> for Selector {
    fn from(selector: PseudoElementSelector) -> Self {
        Self::PseudoElement(selector)
    }
}

impl From<PseudoSelector> for Selector {
    fn from(selector: PseudoSelector) -> Self {
        Self::Pseudo(selector)
    }
}

impl From<AttributeSelector> for Selector {
    fn from(selector: AttributeSelector) -> Self {
        Self::Attribute(selector)
    }
}
