//! The owned connection slot.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::transport::Connection;

/// Shared handle to the current transport connection, if any.
///
/// Created empty, filled once by [`Client::listen`](super::Client::listen),
/// and cloned into everything that talks to the transport.
#[derive(Clone, Default)]
pub struct Link {
    current: Rc<RefCell<Option<Rc<dyn Connection>>>>,
}

impl Link {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, connection: Rc<dyn Connection>) {
        *self.current.borrow_mut() = Some(connection);
    }

    pub fn detach(&self) -> Option<Rc<dyn Connection>> {
        self.current.borrow_mut().take()
    }

    pub fn is_connected(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn current(&self) -> Option<Rc<dyn Connection>> {
        self.current.borrow().clone()
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("connected", &self.is_connected())
            .finish()
    }
}
