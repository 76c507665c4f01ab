//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector serializer to report inputs it tolerates but that a
//! conforming parser should never produce.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Lock the warning set, ignoring poisoning.
fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Warn about a tolerated anomaly (prints once per unique message).
///
/// Returns `true` if the message was printed, `false` if the same
/// component/message pair was already reported.
///
/// # Example
/// ```
/// use cinder_common::warning::warn_once;
///
/// let _ = warn_once("Doc", "empty selector sequence at index 0");
/// assert!(!warn_once("Doc", "empty selector sequence at index 0"));
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_print = warned().get_or_insert_with(HashSet::new).insert(key);

    if should_print {
        eprintln!("{}", format!("[Cinder {component}] ⚠ {message}").yellow());
    }
    should_print
}

/// Clear all recorded warnings, so each message may print once more.
pub fn clear_warnings() {
    let mut guard = warned();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
