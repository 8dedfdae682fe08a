//! Selector fragments and their kinds.

use std::fmt;

use strum_macros::{Display, EnumString};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The kind of a simple selector inside a compound selector.
///
/// Variants are declared in rank order; the derived `Ord` is the rank, so a
/// compound selector is well formed when its kinds never decrease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `a`, `h1`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#nav-bar`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.container`, `.btn`
    Class,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[src$=".png"]`
    Attribute,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:hover`, `:nth-child(2)`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::after`
    PseudoElement,
}

impl FragmentKind {
    /// Position of this kind in the compound-selector ordering.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Whether a compound selector may hold at most one fragment of this kind.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Punctuation written before the fragment text.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Punctuation written after the fragment text.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }
}

/// One typed piece of a compound selector.
///
/// The text is stored raw; it is neither escaped nor checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment {
    kind: FragmentKind,
    text: String,
}

impl Fragment {
    /// Create a fragment of the given kind.
    #[must_use]
    pub fn new(kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The fragment kind.
    #[must_use]
    pub const fn kind(&self) -> FragmentKind {
        self.kind
    }

    /// The raw fragment text, without punctuation.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.kind.prefix(),
            self.text,
            self.kind.suffix()
        )
    }
}
