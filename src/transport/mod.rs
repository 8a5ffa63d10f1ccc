//! Transport Boundary
//!
//! The remote peer is reached through an opaque bidirectional channel. This
//! module names the shapes that cross it; the channel itself is supplied by
//! the embedding application.
//!
//! - [`Connector`] - Opens a channel, delivering one [`ConnectionEvent`] per handler call
//! - [`Connection`] - The open channel: push messages, fork change sets
//! - [`Message`] - Outbound payload: argument keys plus staged events under [`EVENTS_KEY`]

mod changeset;
mod event;

use serde_json::{Map, Value};

pub use changeset::ChangeSet;
pub use event::ConnectionEvent;

/// Outbound message: argument keys to arbitrary JSON values.
pub type Message = Map<String, Value>;

/// Reserved key holding staged events as a nested mapping.
pub const EVENTS_KEY: &str = "";

/// Receives every event the transport produces, in arrival order.
pub type EventHandler = Box<dyn FnMut(ConnectionEvent)>;

/// An open channel to the remote peer.
pub trait Connection {
    /// Send one message, optionally addressed to `url`.
    fn push(&self, url: Option<&str>, data: Message);

    /// Request a new independent change-tracking handle.
    fn fork(&self) -> ChangeSet;
}

/// Opens connections.
///
/// Failing to establish the channel is not an error at this boundary: the
/// connector reports it through `handler` as a `Disconnect` or `Error` event.
pub trait Connector {
    fn connect(&self, handler: EventHandler) -> std::rc::Rc<dyn Connection>;
}
