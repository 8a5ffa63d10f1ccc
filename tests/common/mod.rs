//! Shared fakes for integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wave_bond::{ChangeSet, Connection, ConnectionEvent, Connector, EventHandler, Message, Page};

#[derive(Default)]
pub struct FakePage {
    pub reloads: Cell<usize>,
    pub hashes: RefCell<Vec<String>>,
}

impl Page for FakePage {
    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }

    fn set_hash(&self, fragment: &str) {
        self.hashes.borrow_mut().push(fragment.to_string());
    }
}

#[derive(Default)]
pub struct FakeConnection {
    pub sent: RefCell<Vec<Message>>,
    pub forks: Cell<usize>,
}

impl Connection for FakeConnection {
    fn push(&self, _url: Option<&str>, data: Message) {
        self.sent.borrow_mut().push(data);
    }

    fn fork(&self) -> ChangeSet {
        self.forks.set(self.forks.get() + 1);
        ChangeSet::new(format!("fork-{}", self.forks.get()))
    }
}

/// Hands out one shared connection and keeps the handler so tests can
/// deliver events by hand.
#[derive(Default)]
pub struct FakeConnector {
    pub connection: Rc<FakeConnection>,
    handler: RefCell<Option<EventHandler>>,
    /// Events delivered synchronously from inside `connect`.
    pub on_connect: Vec<ConnectionEvent>,
}

impl FakeConnector {
    pub fn failing(info: &str) -> Self {
        Self {
            on_connect: vec![ConnectionEvent::Disconnect {
                info: serde_json::Value::from(info),
            }],
            ..Self::default()
        }
    }

    pub fn deliver(&self, event: ConnectionEvent) {
        let mut handler = self.handler.borrow_mut();
        let handler = handler.as_mut().expect("connect was not called");
        handler(event);
    }
}

impl Connector for FakeConnector {
    fn connect(&self, mut handler: EventHandler) -> Rc<dyn Connection> {
        for event in self.on_connect.iter().cloned() {
            handler(event);
        }
        *self.handler.borrow_mut() = Some(handler);
        self.connection.clone()
    }
}
