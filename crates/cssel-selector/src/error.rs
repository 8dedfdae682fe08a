//! Error types for selector building.

use thiserror::Error;

use crate::fragment::FragmentKind;

/// Errors raised while appending fragments or combining selectors.
///
/// All of these are programmer errors: a failed call leaves the selector it
/// was made on exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A second `element`, `id` or `pseudo-element` fragment was appended.
    #[error("selector may contain at most one {kind} fragment")]
    DuplicatePart {
        /// The kind that was already present.
        kind: FragmentKind,
    },

    /// A fragment ranked lower than the last stored fragment was appended.
    #[error("a {kind} fragment cannot follow a {after} fragment")]
    Order {
        /// The kind that was being appended.
        kind: FragmentKind,
        /// The kind of the last fragment already in the selector.
        after: FragmentKind,
    },

    /// `combine` was given something other than ` `, `+`, `~` or `>`.
    #[error("invalid combinator {glyph:?}: expected one of \" \", \"+\", \"~\", \">\"")]
    InvalidCombinator {
        /// The rejected glyph, verbatim.
        glyph: String,
    },
}
