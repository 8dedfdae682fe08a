//! Selector-like values that can be rendered and combined.

use std::fmt;

use crate::combinator::CombinedSelector;
use crate::selector::Selector;

/// Render a selector-like value to CSS text.
pub trait Stringify {
    /// The CSS text for this value.
    fn stringify(&self) -> String;
}

/// Either side of a combinator: a compound selector or a nested combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectorNode {
    /// A single compound selector.
    Compound(Selector),
    /// A previously combined selector.
    Combined(Box<CombinedSelector>),
}

impl From<Selector> for SelectorNode {
    fn from(selector: Selector) -> Self {
        Self::Compound(selector)
    }
}

impl From<CombinedSelector> for SelectorNode {
    fn from(combined: CombinedSelector) -> Self {
        Self::Combined(Box::new(combined))
    }
}

impl Stringify for SelectorNode {
    fn stringify(&self) -> String {
        match self {
            Self::Compound(selector) => selector.stringify(),
            Self::Combined(combined) => combined.stringify(),
        }
    }
}

impl fmt::Display for SelectorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(selector) => fmt::Display::fmt(selector, f),
            Self::Combined(combined) => fmt::Display::fmt(combined, f),
        }
    }
}
