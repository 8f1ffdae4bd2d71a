//! Errors raised by the selector builder.

use thiserror::Error;

use super::category::Category;

/// A rejected append.
///
/// The builder is left exactly as it was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An element, id, or pseudo-element was supplied a second time.
    #[error(
        "element, id and pseudo-element should not occur more than one time inside the selector \
         ({category} is already `{existing}`)"
    )]
    Uniqueness {
        /// The category that was repeated.
        category: Category,
        /// The token already recorded for it.
        existing: String,
    },

    /// A category was appended after one that must come later.
    #[error(
        "selector parts should be arranged in the following order: element, id, class, \
         attribute, pseudo-class, pseudo-element ({category} cannot follow {previous})"
    )]
    Order {
        /// The category that was rejected.
        category: Category,
        /// The most recently accepted category.
        previous: Category,
    },
}

impl SelectorError {
    /// The category whose append failed.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Uniqueness { category, .. } | Self::Order { category, .. } => *category,
        }
    }
}
