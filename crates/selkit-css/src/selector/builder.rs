//! The order-checked selector builder.

use std::fmt;

use serde::Serialize;

use super::Render;
use super::category::Category;
use super::error::SelectorError;

/// An accumulating builder for one compound selector.
///
/// Parts are recorded in typed fields and, at the same time, written to a
/// pending text buffer. [`Render::render`] hands out and clears that buffer;
/// the fields are kept, so uniqueness and ordering checks keep applying
/// after a render.
///
/// # Example
/// ```
/// use selkit_css::selector::{Render, Selector};
///
/// # fn main() -> Result<(), selkit_css::selector::SelectorError> {
/// let mut link = Selector::new()
///     .element("a")?
///     .attr("href$=\".png\"")?
///     .pseudo_class("focus")?;
/// assert_eq!(link.render(), "a[href$=\".png\"]:focus");
/// assert_eq!(link.render(), "");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    last: Option<Category>,
    pending: String,
}

impl Selector {
    /// Create an empty selector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            element: None,
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            pseudo_classes: Vec::new(),
            pseudo_element: None,
            last: None,
            pending: String::new(),
        }
    }

    /// Append `token` under `category`, in place.
    ///
    /// On failure nothing is recorded, so the selector can still be
    /// inspected or rendered.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::Uniqueness`] if `category` is element, id, or
    ///   pseudo-element and is already set.
    /// - [`SelectorError::Order`] if a category ranked after `category` was
    ///   appended earlier.
    pub fn push(&mut self, category: Category, token: impl Into<String>) -> Result<(), SelectorError> {
        let token = token.into();
        self.check(category)?;

        #[cfg(feature = "build-trace")]
        eprintln!(
            "[build] {category} rank={} token={token:?}",
            category.rank()
        );

        category.write_token(&mut self.pending, &token);
        match category {
            Category::Element => self.element = Some(token),
            Category::Id => self.id = Some(token),
            Category::Class => self.classes.push(token),
            Category::Attribute => self.attributes.push(token),
            Category::PseudoClass => self.pseudo_classes.push(token),
            Category::PseudoElement => self.pseudo_element = Some(token),
        }
        self.last = Some(category);
        Ok(())
    }

    /// Consume the selector, append one part, and hand it back.
    ///
    /// # Errors
    ///
    /// Same as [`Selector::push`].
    pub fn append(mut self, category: Category, token: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(category, token)?;
        Ok(self)
    }

    /// Set the type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// Fails if an element is already set or anything else was appended.
    pub fn element(self, token: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(Category::Element, token)
    }

    /// Set the id, rendered as `#token`.
    ///
    /// # Errors
    ///
    /// Fails if an id is already set or a class or later part was appended.
    pub fn id(self, token: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(Category::Id, token)
    }

    /// Add a class, rendered as `.token`.
    ///
    /// # Errors
    ///
    /// Fails if an attribute or later part was appended.
    pub fn class(self, token: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(Category::Class, token)
    }

    /// Add an attribute condition, rendered as `[token]`.
    ///
    /// `token` is the full bracket content, e.g. `href$=".png"`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-class or pseudo-element was appended.
    pub fn attr(self, token: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(Category::Attribute, token)
    }

    /// Add a pseudo-class, rendered as `:token`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element was appended.
    pub fn pseudo_class(self, token: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(Category::PseudoClass, token)
    }

    /// Set the pseudo-element, rendered as `::token`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element is already set.
    pub fn pseudo_element(self, token: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(Category::PseudoElement, token)
    }

    fn check(&self, category: Category) -> Result<(), SelectorError> {
        if let Some(existing) = self.singleton(category) {
            return Err(SelectorError::Uniqueness {
                category,
                existing: existing.to_owned(),
            });
        }
        if let Some(previous) = self.last.filter(|previous| previous.rank() > category.rank()) {
            return Err(SelectorError::Order { category, previous });
        }
        Ok(())
    }

    fn singleton(&self, category: Category) -> Option<&str> {
        match category {
            Category::Element => self.element.as_deref(),
            Category::Id => self.id.as_deref(),
            Category::PseudoElement => self.pseudo_element.as_deref(),
            Category::Class | Category::Attribute | Category::PseudoClass => None,
        }
    }

    /// The type selector, if set.
    #[must_use]
    pub fn element_part(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// The id, if set.
    #[must_use]
    pub fn id_part(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Classes in insertion order.
    #[must_use]
    pub fn class_parts(&self) -> &[String] {
        &self.classes
    }

    /// Attribute contents in insertion order, without brackets.
    #[must_use]
    pub fn attribute_parts(&self) -> &[String] {
        &self.attributes
    }

    /// Pseudo-classes in insertion order.
    #[must_use]
    pub fn pseudo_class_parts(&self) -> &[String] {
        &self.pseudo_classes
    }

    /// The pseudo-element, if set.
    #[must_use]
    pub fn pseudo_element_part(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// The most recently accepted category.
    #[must_use]
    pub const fn last_category(&self) -> Option<Category> {
        self.last
    }

    /// Rank of the most recently accepted category, or 0 when empty.
    #[must_use]
    pub fn last_rank(&self) -> u8 {
        self.last.map_or(0, Category::rank)
    }

    /// Text appended since the last render.
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Snapshot of every recorded part.
    #[must_use]
    pub fn parts(&self) -> SelectorParts {
        SelectorParts {
            element: self.element.clone(),
            id: self.id.clone(),
            classes: self.classes.clone(),
            attributes: self.attributes.clone(),
            pseudo_classes: self.pseudo_classes.clone(),
            pseudo_element: self.pseudo_element.clone(),
        }
    }
}

impl Render for Selector {
    fn render(&mut self) -> String {
        std::mem::take(&mut self.pending)
    }
}

/// Full selector text composed from the recorded parts.
///
/// Unlike [`Render::render`] this never clears anything and always yields
/// every part appended so far.
impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        let parts = self
            .element
            .iter()
            .map(|token| (Category::Element, token))
            .chain(self.id.iter().map(|token| (Category::Id, token)))
            .chain(self.classes.iter().map(|token| (Category::Class, token)))
            .chain(self.attributes.iter().map(|token| (Category::Attribute, token)))
            .chain(self.pseudo_classes.iter().map(|token| (Category::PseudoClass, token)))
            .chain(self.pseudo_element.iter().map(|token| (Category::PseudoElement, token)));
        for (category, token) in parts {
            category.write_token(&mut out, token);
        }
        f.write_str(&out)
    }
}

/// Serializable view of a [`Selector`]'s parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectorParts {
    /// Type selector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    /// ID, without `#`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Classes, without `.`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Attribute contents, without brackets.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    /// Pseudo-classes, without `:`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pseudo_classes: Vec<String>,
    /// Pseudo-element, without `::`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pseudo_element: Option<String>,
}
