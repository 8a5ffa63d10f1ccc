//! Session configuration captured from the server.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Who is using the page and whether they may edit it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub username: String,
    pub editable: bool,
}

/// Shared, non-reactive handle to the session [`Config`].
///
/// Written only by the classifier; everything else reads.
#[derive(Clone, Debug, Default)]
pub struct ConfigHandle {
    inner: Rc<RefCell<Config>>,
}

impl ConfigHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current configuration.
    pub fn get(&self) -> Config {
        self.inner.borrow().clone()
    }

    pub fn username(&self) -> String {
        self.inner.borrow().username.clone()
    }

    pub fn editable(&self) -> bool {
        self.inner.borrow().editable
    }

    pub(crate) fn apply(&self, username: String, editable: bool) {
        let mut config = self.inner.borrow_mut();
        config.username = username;
        config.editable = editable;
    }
}
