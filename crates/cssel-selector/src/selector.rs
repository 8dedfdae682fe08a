//! The compound-selector accumulator.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//!
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator, and represents a set of simultaneous
//! conditions on a single element."

use std::fmt;

use crate::error::SelectorError;
use crate::fragment::{Fragment, FragmentKind};
use crate::node::Stringify;

/// An ordered, validated sequence of fragments.
///
/// Obtained from one of the builder functions ([`crate::element`],
/// [`crate::id`], ...) and extended by chaining. Every append checks that
/// element, id and pseudo-element appear at most once, and that fragment
/// kinds never go down in rank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    fragments: Vec<Fragment>,
}

impl Selector {
    #[cfg(test)]
    pub(crate) const fn empty() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// A selector holding just `first`. Validation against an empty
    /// sequence cannot fail, so none is run.
    pub(crate) fn seeded(first: Fragment) -> Self {
        Self {
            fragments: vec![first],
        }
    }

    /// Validate and append a fragment in place.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicatePart`] if `kind` is element, id or
    /// pseudo-element and one is already present, or [`SelectorError::Order`]
    /// if `kind` ranks below the last fragment. The selector is unchanged on
    /// error.
    pub fn append(
        &mut self,
        kind: FragmentKind,
        text: impl Into<String>,
    ) -> Result<&mut Self, SelectorError> {
        self.validate(kind)?;
        self.fragments.push(Fragment::new(kind, text));
        Ok(self)
    }

    fn validate(&self, kind: FragmentKind) -> Result<(), SelectorError> {
        if kind.is_unique() && self.fragments.iter().any(|f| f.kind() == kind) {
            return Err(SelectorError::DuplicatePart { kind });
        }

        // Equal rank is fine: `.a.b`, `[x][y]`, `:hover:focus`.
        if let Some(after) = self.last_kind()
            && kind.rank() < after.rank()
        {
            return Err(SelectorError::Order { kind, after });
        }

        Ok(())
    }

    fn chain(
        mut self,
        kind: FragmentKind,
        text: impl Into<String>,
    ) -> Result<Self, SelectorError> {
        let _ = self.append(kind, text)?;
        Ok(self)
    }

    /// Append a type selector (`div`).
    ///
    /// # Errors
    ///
    /// Fails if an element is already present or any fragment is.
    pub fn element(self, text: impl Into<String>) -> Result<Self, SelectorError> {
        self.chain(FragmentKind::Element, text)
    }

    /// Append an id selector (`#main`).
    ///
    /// # Errors
    ///
    /// Fails if an id is already present or a class, attribute or pseudo
    /// fragment precedes it.
    pub fn id(self, text: impl Into<String>) -> Result<Self, SelectorError> {
        self.chain(FragmentKind::Id, text)
    }

    /// Append a class selector (`.container`).
    ///
    /// # Errors
    ///
    /// Fails if an attribute or pseudo fragment precedes it.
    pub fn class(self, text: impl Into<String>) -> Result<Self, SelectorError> {
        self.chain(FragmentKind::Class, text)
    }

    /// Append an attribute selector. `text` is the bracket content, e.g.
    /// `href$=".png"`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo fragment precedes it.
    pub fn attribute(self, text: impl Into<String>) -> Result<Self, SelectorError> {
        self.chain(FragmentKind::Attribute, text)
    }

    /// Append a pseudo-class (`:hover`).
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element precedes it.
    pub fn pseudo_class(self, text: impl Into<String>) -> Result<Self, SelectorError> {
        self.chain(FragmentKind::PseudoClass, text)
    }

    /// Append a pseudo-element (`::before`).
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element is already present.
    pub fn pseudo_element(self, text: impl Into<String>) -> Result<Self, SelectorError> {
        self.chain(FragmentKind::PseudoElement, text)
    }

    /// The fragments in the order they were appended.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the selector holds no fragments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Kind of the most recently appended fragment.
    #[must_use]
    pub fn last_kind(&self) -> Option<FragmentKind> {
        self.fragments.last().map(Fragment::kind)
    }
}

impl Stringify for Selector {
    fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            write!(f, "{fragment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selector_accepts_any_kind() {
        let mut selector = Selector::empty();
        assert!(selector.append(FragmentKind::PseudoElement, "after").is_ok());
        assert_eq!(selector.stringify(), "::after");
    }

    #[test]
    fn test_failed_append_leaves_fragments_untouched() {
        let mut selector = Selector::empty();
        let _ = selector.append(FragmentKind::Class, "a").unwrap();
        let before = selector.clone();

        assert!(selector.append(FragmentKind::Id, "late").is_err());
        assert_eq!(selector, before);
    }

    #[test]
    fn test_uniqueness_checked_before_order() {
        let mut selector = Selector::empty();
        let _ = selector.append(FragmentKind::Id, "a").unwrap();
        let _ = selector.append(FragmentKind::Class, "x").unwrap();

        assert_eq!(
            selector.append(FragmentKind::Id, "b").unwrap_err(),
            SelectorError::DuplicatePart {
                kind: FragmentKind::Id
            }
        );
    }
}
