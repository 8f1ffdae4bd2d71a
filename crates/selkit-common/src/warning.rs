//! Diagnostics with colored terminal output.
//!
//! Each distinct message is printed once per process. The selector builder
//! uses this to flag input it accepts verbatim but does not recognize, such
//! as an unknown combinator token.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Messages already printed, keyed by `[component] message`.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about questionable input (prints once per unique message).
///
/// Returns `true` if this call printed the warning, `false` if the same
/// component/message pair was already reported.
///
/// # Example
/// ```
/// use selkit_common::warning::warn_once;
///
/// let _ = warn_once("css", "unknown combinator token `|`");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[selkit {component}] warning: {message}").yellow());
    }
    should_print
}

/// Forget every recorded warning so each one can be printed again.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
