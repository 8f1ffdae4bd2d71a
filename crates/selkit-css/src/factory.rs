//! One-call entry points.
//!
//! Each function starts a fresh [`Selector`] and applies a single part, so
//! chains can begin at any category:
//!
//! ```
//! use selkit_css::factory::class;
//! use selkit_css::selector::Render;
//!
//! # fn main() -> Result<(), selkit_css::selector::SelectorError> {
//! assert_eq!(class("main")?.class("container")?.render(), ".main.container");
//! # Ok(())
//! # }
//! ```
//!
//! None of these can fail on a fresh selector; they return `Result` so the
//! rest of the chain composes with `?`.

use crate::selector::{Selector, SelectorError};

pub use crate::selector::combine;

/// Start a selector with a type selector.
///
/// # Errors
///
/// Never fails on its own; see [`Selector::element`].
pub fn element(token: impl Into<String>) -> Result<Selector, SelectorError> {
    Selector::new().element(token)
}

/// Start a selector with an id.
///
/// # Errors
///
/// Never fails on its own; see [`Selector::id`].
pub fn id(token: impl Into<String>) -> Result<Selector, SelectorError> {
    Selector::new().id(token)
}

/// Start a selector with a class.
///
/// # Errors
///
/// Never fails on its own; see [`Selector::class`].
pub fn class(token: impl Into<String>) -> Result<Selector, SelectorError> {
    Selector::new().class(token)
}

/// Start a selector with an attribute condition.
///
/// # Errors
///
/// Never fails on its own; see [`Selector::attr`].
pub fn attr(token: impl Into<String>) -> Result<Selector, SelectorError> {
    Selector::new().attr(token)
}

/// Start a selector with a pseudo-class.
///
/// # Errors
///
/// Never fails on its own; see [`Selector::pseudo_class`].
pub fn pseudo_class(token: impl Into<String>) -> Result<Selector, SelectorError> {
    Selector::new().pseudo_class(token)
}

/// Start a selector with a pseudo-element.
///
/// # Errors
///
/// Never fails on its own; see [`Selector::pseudo_element`].
pub fn pseudo_element(token: impl Into<String>) -> Result<Selector, SelectorError> {
    Selector::new().pseudo_element(token)
}
