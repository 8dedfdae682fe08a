//! Builder for CSS compound selectors and combinator trees.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, id, class, attribute, pseudo-class and pseudo-element fragments
//!   - At most one type, id and pseudo-element per compound
//!   - Fragment order enforced: type, id, class, attribute, pseudo-class, pseudo-element
//!
//! - **Combinators** ([§ 16](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling and subsequent-sibling
//!   - Arbitrarily nested combinations
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Matching selectors against a document
//! - Specificity
//!
//! # Example
//! ```
//! use cssel_selector::{Stringify, id};
//!
//! let s = id("main").class("container")?.class("editable")?;
//! assert_eq!(s.stringify(), "#main.container.editable");
//! # Ok::<(), cssel_selector::SelectorError>(())
//! ```

/// Facade functions that start a selector chain.
pub mod builder;
/// Combinators and combined selectors per [§ 16](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Error types.
pub mod error;
/// Fragment kinds and fragments.
pub mod fragment;
/// Rendering trait and the selector-or-combination node type.
pub mod node;
/// Compound selector accumulator per [§ 4.2](https://www.w3.org/TR/selectors-4/#compound).
pub mod selector;

// Re-exports for convenience
pub use builder::{attribute, class, element, from_kind, id, pseudo_class, pseudo_element};
pub use combinator::{CombinedSelector, Combinator, combine, combine_with};
pub use error::SelectorError;
pub use fragment::{Fragment, FragmentKind};
pub use node::{SelectorNode, Stringify};
pub use selector::Selector;
