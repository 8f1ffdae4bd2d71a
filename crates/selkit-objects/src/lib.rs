//! Plain data objects and JSON passthrough helpers.
//!
//! Nothing here depends on the selector builder; these are the small
//! companion utilities of the selkit workspace.

/// Direct `serde_json` encode and decode wrappers.
pub mod json;
/// An axis-aligned rectangle with a derived area.
pub mod rectangle;

pub use json::{JsonError, from_json, to_json};
pub use rectangle::Rectangle;
