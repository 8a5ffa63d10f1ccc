//! Navigation shortcut.
//!
//! `jump` either moves within the page (values starting with `#`) or stages
//! an argument and flushes it to the server in one step.

use serde_json::Value;

use crate::client::Batcher;

/// Marker for an in-page anchor.
pub const ANCHOR: char = '#';

/// The host page: the part of the browser window this crate touches.
pub trait Page {
    /// Throw away all in-memory state and load the page again.
    fn reload(&self);

    /// Set the URL fragment (without the leading `#`).
    fn set_hash(&self, fragment: &str);
}

/// Jump to an anchor, or push an argument to the server.
///
/// - `"#section"` sets the fragment to `section`; nothing is sent.
/// - With a non-empty `key`, stages `key = value`.
/// - Without one, stages `value = true`.
///
/// Both staging cases flush immediately.
pub fn jump(page: &dyn Page, batcher: &Batcher, key: Option<&str>, value: &str) {
    if let Some(fragment) = value.strip_prefix(ANCHOR) {
        page.set_hash(fragment);
        return;
    }

    match key.filter(|key| !key.is_empty()) {
        Some(key) => batcher.set_arg(key, Value::from(value)),
        None => batcher.set_arg(value, Value::Bool(true)),
    }
    batcher.push();
}
