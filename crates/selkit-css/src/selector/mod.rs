//! CSS selector building.
//!
//! Selectors are assembled part by part rather than parsed. The parts of
//! one compound selector must arrive in the order
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! writes them (type selector first, pseudo-element last), and the type
//! selector, id, and pseudo-element may each appear only once.

mod builder;
mod category;
mod combinator;
mod error;

pub use builder::{Selector, SelectorParts};
pub use category::Category;
pub use combinator::{Combinator, CompositeSelector, combine};
pub use error::SelectorError;

/// A value that can hand out its accumulated selector text.
pub trait Render {
    /// Return the text accumulated so far and clear it.
    ///
    /// A second call with no mutation in between returns an empty string.
    fn render(&mut self) -> String;
}

impl<T: Render + ?Sized> Render for &mut T {
    fn render(&mut self) -> String {
        (**self).render()
    }
}

/// An already rendered selector string; rendering moves the text out.
impl Render for String {
    fn render(&mut self) -> String {
        std::mem::take(self)
    }
}
