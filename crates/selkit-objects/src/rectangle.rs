use serde::{Deserialize, Serialize};

/// A rectangle described only by its two side lengths.
///
/// # Example
/// ```
/// use selkit_objects::Rectangle;
///
/// assert_eq!(Rectangle::new(10.0, 20.0).area(), 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal side length.
    pub width: f64,
    /// Vertical side length.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its side lengths.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`, computed on every call.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
