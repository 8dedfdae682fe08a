//! Entry points that start a selector chain.
//!
//! Each function returns a new [`Selector`] holding one fragment of the
//! matching kind. The first fragment of a selector is always valid, so none
//! of these return `Result`.

use crate::fragment::{Fragment, FragmentKind};
use crate::selector::Selector;

fn seed(kind: FragmentKind, text: impl Into<String>) -> Selector {
    Selector::seeded(Fragment::new(kind, text))
}

/// Start a selector with a type selector, e.g. `element("a")` → `a`.
#[must_use]
pub fn element(text: impl Into<String>) -> Selector {
    seed(FragmentKind::Element, text)
}

/// Start a selector with an id, e.g. `id("main")` → `#main`.
#[must_use]
pub fn id(text: impl Into<String>) -> Selector {
    seed(FragmentKind::Id, text)
}

/// Start a selector with a class, e.g. `class("btn")` → `.btn`.
#[must_use]
pub fn class(text: impl Into<String>) -> Selector {
    seed(FragmentKind::Class, text)
}

/// Start a selector with an attribute, e.g. `attribute("href")` → `[href]`.
#[must_use]
pub fn attribute(text: impl Into<String>) -> Selector {
    seed(FragmentKind::Attribute, text)
}

/// Start a selector with a pseudo-class, e.g. `pseudo_class("hover")` → `:hover`.
#[must_use]
pub fn pseudo_class(text: impl Into<String>) -> Selector {
    seed(FragmentKind::PseudoClass, text)
}

/// Start a selector with a pseudo-element, e.g. `pseudo_element("before")` → `::before`.
#[must_use]
pub fn pseudo_element(text: impl Into<String>) -> Selector {
    seed(FragmentKind::PseudoElement, text)
}

/// Start a selector with a fragment of any kind.
#[must_use]
pub fn from_kind(kind: FragmentKind, text: impl Into<String>) -> Selector {
    seed(kind, text)
}
