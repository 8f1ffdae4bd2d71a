//! Order-checked CSS selector construction for selkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector builder** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, id, class, attribute, pseudo-class, and pseudo-element parts
//!   - Fixed part ordering and single-occurrence checks
//!   - Draining `render` plus an idempotent `Display`
//!
//! - **Combinators** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling, and subsequent-sibling joins
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Matching selectors against a document
//! - Specificity

/// Per-category entry points that start a new selector.
pub mod factory;
/// The selector builder, its categories, errors, and combinators.
pub mod selector;

// Re-exports for convenience
pub use selector::{
    Category, Combinator, CompositeSelector, Render, Selector, SelectorError, SelectorParts,
    combine,
};
