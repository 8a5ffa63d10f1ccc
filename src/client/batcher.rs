//! Outgoing request batcher.
//!
//! UI callbacks stage arguments and events; [`Batcher::push`] flushes
//! everything staged as one message and clears both maps.
//!
//! # Message Shape
//!
//! ```text
//! { "<arg>": <value>, ..., "": { "<event>": <value>, ... } }
//! ```
//!
//! The `""` entry is present only when at least one event was staged.

use std::cell::RefCell;
use std::mem;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::transport::{ChangeSet, Message, EVENTS_KEY};

use super::Link;

pub struct Batcher {
    link: Link,
    args: RefCell<Message>,
    events: RefCell<Message>,
}

impl Batcher {
    pub fn new(link: Link) -> Self {
        Self {
            link,
            args: RefCell::new(Message::new()),
            events: RefCell::new(Message::new()),
        }
    }

    /// Stage an argument. Replaces an earlier value under the same key.
    pub fn set_arg(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.args.borrow_mut().insert(key.into(), value.into());
    }

    /// Stage an event. Replaces an earlier value under the same key.
    pub fn set_event(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.events.borrow_mut().insert(key.into(), value.into());
    }

    /// Snapshot of the staged arguments.
    pub fn args(&self) -> Message {
        self.args.borrow().clone()
    }

    /// Snapshot of the staged events.
    pub fn events(&self) -> Message {
        self.events.borrow().clone()
    }

    /// Build the outbound message from everything staged, clearing both maps.
    pub fn take(&self) -> Message {
        let mut data = mem::take(&mut *self.args.borrow_mut());
        let events = mem::take(&mut *self.events.borrow_mut());
        if !events.is_empty() {
            data.insert(EVENTS_KEY.to_string(), Value::Object(events));
        }
        data
    }

    /// Flush staged state to the transport.
    ///
    /// Does nothing when no transport is attached; staged values stay where
    /// they are.
    pub fn push(&self) {
        let Some(connection) = self.link.current() else {
            tracing::debug!("push dropped: no transport connected");
            return;
        };

        let data = self.take();
        tracing::debug!(keys = data.len(), "pushing staged state");
        connection.push(None, data);
    }

    /// Request a new change set from the transport.
    pub fn fork(&self) -> Result<ChangeSet> {
        let connection = self.link.current().ok_or(Error::NotConnected)?;
        Ok(connection.fork())
    }
}
