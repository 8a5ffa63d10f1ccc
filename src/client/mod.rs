//! Client
//!
//! Wires the transport to the reactive state the UI reads.
//!
//! ```text
//! UI interaction → Batcher (stage) → push → Connection
//! Connection → EventHandler → Classifier → Cells → bound components re-render
//! ```
//!
//! # Example
//!
//! ```ignore
//! use wave_bond::client::Client;
//!
//! let client = Client::new(page);
//! client.listen(&connector);
//!
//! client.batcher().set_event("save", true);
//! client.batcher().push();
//!
//! let _sub = on(client.classifier().busy(), |busy| spinner(*busy));
//! ```

mod batcher;
mod classifier;
mod config;
mod link;

use std::rc::Rc;

pub use batcher::Batcher;
pub use classifier::{Classifier, Flow};
pub use config::{Config, ConfigHandle};
pub use link::Link;

use crate::error::Result;
use crate::nav::{self, Page};
use crate::transport::{ChangeSet, Connector};

/// One client session: the connection slot plus everything that shares it.
pub struct Client {
    link: Link,
    page: Rc<dyn Page>,
    classifier: Rc<Classifier>,
    batcher: Rc<Batcher>,
}

impl Client {
    pub fn new(page: Rc<dyn Page>) -> Self {
        let link = Link::new();
        Self {
            classifier: Rc::new(Classifier::new(page.clone(), ConfigHandle::new())),
            batcher: Rc::new(Batcher::new(link.clone())),
            link,
            page,
        }
    }

    /// Open the transport and route its events through the classifier.
    ///
    /// The connection is attached once `connect` returns; events the
    /// connector delivers before that are still classified.
    pub fn listen(&self, connector: &dyn Connector) {
        let classifier = self.classifier.clone();
        let connection = connector.connect(Box::new(move |event| {
            classifier.dispatch(event);
        }));
        self.link.attach(connection);
        tracing::debug!("transport attached");
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    pub fn classifier(&self) -> &Rc<Classifier> {
        &self.classifier
    }

    pub fn batcher(&self) -> &Rc<Batcher> {
        &self.batcher
    }

    pub fn config(&self) -> &ConfigHandle {
        self.classifier.config()
    }

    /// See [`nav::jump`].
    pub fn jump(&self, key: Option<&str>, value: &str) {
        nav::jump(self.page.as_ref(), &self.batcher, key, value);
    }

    /// Flush staged arguments and events.
    pub fn push(&self) {
        self.batcher.push();
    }

    pub fn fork(&self) -> Result<ChangeSet> {
        self.batcher.fork()
    }
}
