//! Joining two selectors with a combinator.
//!
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

use std::fmt;

use selkit_common::warning::warn_once;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use super::Render;

/// The four structural relationships a combinator can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Combinator {
    /// `A B`: B is an arbitrary descendant of A.
    Descendant,
    /// `A + B`: B immediately follows A.
    NextSibling,
    /// `A ~ B`: B follows A, not necessarily immediately.
    SubsequentSibling,
    /// `A > B`: B is a direct child of A.
    Child,
}

impl Combinator {
    /// The token written between the two selectors.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
            Self::Child => ">",
        }
    }

    /// Look up the combinator written as `token`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::iter().find(|combinator| combinator.token() == token)
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.token()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Two rendered selectors joined by a combinator.
///
/// The text is fixed when the composite is built; rendering it drains it,
/// the same as a [`Selector`](super::Selector).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositeSelector {
    pending: String,
}

impl CompositeSelector {
    /// Text not yet handed out by [`Render::render`].
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }
}

impl Render for CompositeSelector {
    fn render(&mut self) -> String {
        std::mem::take(&mut self.pending)
    }
}

/// Render `left` and `right` and join them as `left combinator right`.
///
/// `combinator` is normally one of ` `, `+`, `~`, `>` (or a [`Combinator`]),
/// but any text is accepted and written verbatim; unknown tokens are
/// reported once through the warning system. Passing `&mut selector`
/// drains that selector, exactly as calling `render` on it would.
///
/// # Example
/// ```
/// use selkit_css::factory::element;
/// use selkit_css::selector::{Render, combine};
///
/// # fn main() -> Result<(), selkit_css::selector::SelectorError> {
/// let mut rows = combine(element("div")?.id("main")?, "+", element("table")?.id("data")?);
/// assert_eq!(rows.render(), "div#main + table#data");
/// # Ok(())
/// # }
/// ```
pub fn combine<L, R>(mut left: L, combinator: impl AsRef<str>, mut right: R) -> CompositeSelector
where
    L: Render,
    R: Render,
{
    let combinator = combinator.as_ref();
    if Combinator::from_token(combinator).is_none() {
        let _ = warn_once(
            "css",
            &format!("unrecognized combinator token {combinator:?}, writing it verbatim"),
        );
    }
    CompositeSelector {
        pending: format!("{} {combinator} {}", left.render(), right.render()),
    }
}
