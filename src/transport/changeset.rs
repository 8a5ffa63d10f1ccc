//! Change sets handed out by `Connection::fork`.

use serde::Serialize;
use serde_json::{Map, Value};

/// An independent change-tracking handle.
///
/// Staged changes accumulate until the owner drains them.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChangeSet {
    id: String,
    changes: Map<String, Value>,
}

impl ChangeSet {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            changes: Map::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Stage `value` under `key`, replacing any earlier change to it.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.changes.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.changes.get(key)
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Take every staged change, leaving the set empty.
    pub fn drain(&mut self) -> Map<String, Value> {
        std::mem::take(&mut self.changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_replaces_and_drain_empties() {
        let mut changes = ChangeSet::new("cs1");
        changes.set("title", json!("a"));
        changes.set("title", json!("b"));

        assert_eq!(changes.id(), "cs1");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes.get("title"), Some(&json!("b")));

        let drained = changes.drain();
        assert_eq!(drained.len(), 1);
        assert!(changes.is_empty());
    }
}
