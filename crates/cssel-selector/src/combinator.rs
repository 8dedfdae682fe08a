//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
//!
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."

use std::fmt;

use strum_macros::{Display, EnumString};

use crate::error::SelectorError;
use crate::node::{SelectorNode, Stringify};

/// The four relationships a combinator can express, parsed from and
/// displayed as their glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    #[strum(to_string = " ")]
    Descendant,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    #[strum(to_string = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    #[strum(to_string = "~")]
    SubsequentSibling,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    #[strum(to_string = ">")]
    Child,
}

impl Combinator {
    /// The glyph written between the two sides.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
            Self::Child => ">",
        }
    }
}

/// Two selectors joined by a combinator.
///
/// Owns both sides; either may itself be a `CombinedSelector`, so nested
/// calls build a tree that renders in its literal left/right shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CombinedSelector {
    left: SelectorNode,
    combinator: Combinator,
    right: SelectorNode,
}

impl CombinedSelector {
    /// The left-hand side.
    #[must_use]
    pub const fn left(&self) -> &SelectorNode {
        &self.left
    }

    /// The combinator joining the two sides.
    #[must_use]
    pub const fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// The right-hand side.
    #[must_use]
    pub const fn right(&self) -> &SelectorNode {
        &self.right
    }
}

impl Stringify for CombinedSelector {
    fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.left,
            self.combinator.glyph(),
            self.right
        )
    }
}

/// Join two built selectors with a combinator glyph: `" "`, `"+"`, `"~"` or `">"`.
///
/// # Errors
///
/// Returns [`SelectorError::InvalidCombinator`] for any other glyph.
///
/// # Example
/// ```
/// use cssel_selector::{Stringify, combine, element};
///
/// let list = combine(element("ul"), ">", element("li").class("active")?)?;
/// assert_eq!(list.stringify(), "ul > li.active");
/// # Ok::<(), cssel_selector::SelectorError>(())
/// ```
pub fn combine(
    left: impl Into<SelectorNode>,
    glyph: &str,
    right: impl Into<SelectorNode>,
) -> Result<CombinedSelector, SelectorError> {
    let combinator = glyph
        .parse::<Combinator>()
        .map_err(|_| SelectorError::InvalidCombinator {
            glyph: glyph.to_string(),
        })?;
    Ok(combine_with(left, combinator, right))
}

/// Join two built selectors with an already-typed combinator.
#[must_use]
pub fn combine_with(
    left: impl Into<SelectorNode>,
    combinator: Combinator,
    right: impl Into<SelectorNode>,
) -> CombinedSelector {
    CombinedSelector {
        left: left.into(),
        combinator,
        right: right.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_matches_display() {
        for c in [
            Combinator::Descendant,
            Combinator::NextSibling,
            Combinator::SubsequentSibling,
            Combinator::Child,
        ] {
            assert_eq!(c.to_string(), c.glyph());
            assert_eq!(c.glyph().parse::<Combinator>(), Ok(c));
        }
    }

    #[test]
    fn test_unknown_glyph_does_not_parse() {
        assert!("|".parse::<Combinator>().is_err());
        assert!("".parse::<Combinator>().is_err());
        assert!(">>".parse::<Combinator>().is_err());
    }
}
