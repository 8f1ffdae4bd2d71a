//! Common utilities for the selkit crates.
//!
//! This crate provides shared infrastructure used by every selkit component:
//! - **Warning System** - colored, deduplicated stderr diagnostics

pub mod warning;
