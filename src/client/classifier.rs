//! Connection event classifier.
//!
//! Routes each [`ConnectionEvent`] to its sink:
//!
//! | Event | Sink |
//! |---|---|
//! | receive, error, exception, disconnect | `content` cell |
//! | reset | [`Page::reload`], nothing else |
//! | config | [`ConfigHandle`] (plain mutation) |
//! | send | `args` cell |
//! | busy / free | `busy` cell |
//!
//! Failures reported by the transport are data here. Dispatch never fails.

use std::rc::Rc;

use serde_json::{Map, Value};

use crate::nav::Page;
use crate::reactive::{cell, Cell};
use crate::transport::ConnectionEvent;

use super::ConfigHandle;

/// What the caller should do after an event was dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Keep processing events.
    Continue,
    /// The page is reloading; drop the rest of the batch.
    Reload,
}

pub struct Classifier {
    content: Cell<Option<ConnectionEvent>>,
    args: Cell<Value>,
    busy: Cell<bool>,
    config: ConfigHandle,
    page: Rc<dyn Page>,
}

impl Classifier {
    pub fn new(page: Rc<dyn Page>, config: ConfigHandle) -> Self {
        Self {
            content: cell(None),
            args: cell(Value::Object(Map::new())),
            busy: cell(false),
            config,
            page,
        }
    }

    /// Last content-bearing event (receive or a reported failure).
    pub fn content(&self) -> &Cell<Option<ConnectionEvent>> {
        &self.content
    }

    /// Arguments echoed back by the server.
    pub fn args(&self) -> &Cell<Value> {
        &self.args
    }

    /// Whether the server is processing a request.
    pub fn busy(&self) -> &Cell<bool> {
        &self.busy
    }

    pub fn config(&self) -> &ConfigHandle {
        &self.config
    }

    /// Route one event.
    pub fn dispatch(&self, event: ConnectionEvent) -> Flow {
        tracing::debug!(kind = event.kind(), "dispatching connection event");

        match event {
            ConnectionEvent::Receive { .. }
            | ConnectionEvent::Error { .. }
            | ConnectionEvent::Exception { .. }
            | ConnectionEvent::Disconnect { .. } => {
                if event.is_failure() {
                    tracing::warn!(kind = event.kind(), "transport reported a failure");
                }
                self.content.emit(Some(event));
            }
            ConnectionEvent::Reset => {
                tracing::info!("server requested reset, reloading page");
                self.page.reload();
                return Flow::Reload;
            }
            ConnectionEvent::Config { username, editable } => {
                tracing::debug!(
                    has_username = !username.is_empty(),
                    editable,
                    "session config received"
                );
                self.config.apply(username, editable);
            }
            ConnectionEvent::Send { data } => {
                self.args.emit(data);
            }
            ConnectionEvent::Busy => self.busy.set(true),
            ConnectionEvent::Free => self.busy.set(false),
        }

        Flow::Continue
    }

    /// Route events in order, stopping at the first reset.
    pub fn dispatch_all(&self, events: impl IntoIterator<Item = ConnectionEvent>) -> Flow {
        for event in events {
            if self.dispatch(event) == Flow::Reload {
                return Flow::Reload;
            }
        }
        Flow::Continue
    }
}
