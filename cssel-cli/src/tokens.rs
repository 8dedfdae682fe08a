//! Command-line tokens for `cssel build`.
//!
//! A token is either `kind=text` (one fragment) or a combinator glyph.
//! Consecutive fragments form one compound selector; each combinator joins
//! everything built so far with the next compound.

use anyhow::{Result, anyhow, bail};
use cssel_selector::{Combinator, FragmentKind, Selector, SelectorNode, combine_with, from_kind};

/// One parsed command-line token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A fragment to append to the current compound.
    Fragment(FragmentKind, String),
    /// A combinator closing the current compound.
    Combinator(Combinator),
}

/// Parse a single token.
///
/// `descendant` and any whitespace-only token stand for the descendant
/// combinator, which is awkward to pass as a bare space.
pub fn parse_token(raw: &str) -> Result<Token> {
    if raw == "descendant" || (!raw.is_empty() && raw.trim().is_empty()) {
        return Ok(Token::Combinator(Combinator::Descendant));
    }
    if let Ok(combinator) = raw.parse::<Combinator>() {
        return Ok(Token::Combinator(combinator));
    }

    let (kind, text) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KIND=TEXT or a combinator, got '{raw}'"))?;
    let kind = kind.parse::<FragmentKind>().map_err(|_| {
        anyhow!(
            "unknown fragment kind '{kind}' (expected element, id, class, attribute, \
             pseudo-class or pseudo-element)"
        )
    })?;
    Ok(Token::Fragment(kind, text.to_string()))
}

fn join(built: Option<SelectorNode>, pending: Option<Combinator>, next: Selector) -> SelectorNode {
    match (built, pending) {
        (Some(built), Some(combinator)) => combine_with(built, combinator, next).into(),
        _ => next.into(),
    }
}

/// Build a selector tree from a token sequence, combining left to right.
pub fn build<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<SelectorNode> {
    let mut built: Option<SelectorNode> = None;
    let mut pending: Option<Combinator> = None;
    let mut current: Option<Selector> = None;

    for raw in tokens {
        match parse_token(raw)? {
            Token::Fragment(kind, text) => match current.as_mut() {
                Some(selector) => {
                    let _ = selector.append(kind, text)?;
                }
                None => current = Some(from_kind(kind, text)),
            },
            Token::Combinator(combinator) => {
                let Some(selector) = current.take() else {
                    bail!("combinator '{combinator}' must follow a selector");
                };
                built = Some(join(built, pending.take(), selector));
                pending = Some(combinator);
            }
        }
    }

    match current {
        Some(selector) => Ok(join(built, pending, selector)),
        None if pending.is_some() => bail!("trailing combinator has no right-hand selector"),
        None => bail!("no selector fragments given"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssel_selector::Stringify;

    #[test]
    fn test_parse_fragment_keeps_text_after_first_equals() {
        assert_eq!(
            parse_token(r#"attribute=href$=".png""#).unwrap(),
            Token::Fragment(FragmentKind::Attribute, r#"href$=".png""#.to_string())
        );
    }

    #[test]
    fn test_parse_combinators() {
        assert_eq!(
            parse_token(">").unwrap(),
            Token::Combinator(Combinator::Child)
        );
        assert_eq!(
            parse_token(" ").unwrap(),
            Token::Combinator(Combinator::Descendant)
        );
        assert_eq!(
            parse_token("descendant").unwrap(),
            Token::Combinator(Combinator::Descendant)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        assert!(parse_token("tag=div").is_err());
        assert!(parse_token("div").is_err());
    }

    #[test]
    fn test_build_compound() {
        let node = build(["id=main", "class=container", "class=editable"]).unwrap();
        assert_eq!(node.stringify(), "#main.container.editable");
    }

    #[test]
    fn test_build_combines_left_to_right() {
        let node = build(["element=ul", ">", "element=li", "+", "class=x"]).unwrap();
        assert_eq!(node.stringify(), "ul > li + .x");
        let SelectorNode::Combined(outer) = node else {
            panic!("expected a combined selector");
        };
        assert_eq!(outer.combinator(), Combinator::NextSibling);
        assert!(matches!(outer.left(), SelectorNode::Combined(_)));
    }

    #[test]
    fn test_build_reports_selector_errors() {
        let err = build(["pseudo-class=hover", "class=x"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "a class fragment cannot follow a pseudo-class fragment"
        );
    }

    #[test]
    fn test_build_rejects_dangling_combinators() {
        assert!(build([">", "element=a"]).is_err());
        assert!(build(["element=a", ">"]).is_err());
        assert!(build(["element=a", ">", "~", "element=b"]).is_err());
        assert!(build(Vec::<&str>::new()).is_err());
    }
}
