//! Selector categories and their fixed ordering.
//!
//! A compound selector is written as element, id, classes, attributes,
//! pseudo-classes, then pseudo-element. Each category owns a rank in that
//! sequence; the builder refuses appends that would move backwards.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

/// One kind of simple selector the builder knows how to append.
///
/// The declaration order is the required output order, so `Ord` on this
/// type agrees with [`Category::rank`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Type selector, written verbatim. Example: `div`
    Element,
    /// ID selector, prefixed with `#`. Example: `#main`
    Id,
    /// Class selector, prefixed with `.`. Example: `.container`
    Class,
    /// Attribute selector, wrapped in brackets. Example: `[href$=".png"]`
    Attribute,
    /// Pseudo-class, prefixed with `:`. Example: `:focus`
    PseudoClass,
    /// Pseudo-element, prefixed with `::`. Example: `::before`
    PseudoElement,
}

impl Category {
    /// Every category, in rank order.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Position of this category in the mandated sequence, starting at 1.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Element => 1,
            Self::Id => 2,
            Self::Class => 3,
            Self::Attribute => 4,
            Self::PseudoClass => 5,
            Self::PseudoElement => 6,
        }
    }

    /// Whether the category may appear more than once in one selector.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }

    /// Text written before the token.
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

    /// Text written after the token.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }

    /// Write `token` with this category's punctuation into `out`.
    ///
    /// The token itself is never inspected or escaped.
    pub fn write_token(self, out: &mut String, token: &str) {
        out.push_str(self.prefix());
        out.push_str(token);
        out.push_str(self.suffix());
    }
}
