//! Internal error type for the selector serializer.

use thiserror::Error;

use crate::types::AttributeAction;

/// Errors raised when the renderer and the token model disagree.
///
/// None of these are input errors: every well-formed token tree renders.
/// Seeing one means a rendering rule is missing for part of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An operator symbol was requested for an action that has none.
    ///
    /// Only [`AttributeAction::Exists`] lacks a symbol; `[attr]` carries no
    /// operator and no value.
    #[error("attribute action `{0}` has no operator symbol")]
    NoActionSymbol(AttributeAction),
}
