//! # wave-bond
//!
//! Reactive data binding between a server-pushed event stream and a
//! component tree.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! cell storage.
//!
//! ## Architecture
//!
//! ```text
//! UI interaction → jump / Batcher → push → Connection
//!                                              ↓
//! bound components ← Cells ← Classifier ← ConnectionEvent
//! ```
//!
//! Everything runs on one logical thread, the way a UI event loop does:
//! cells, components and the client are `Rc`-based and not `Send`.
//! [`debounce`] timers are tokio local tasks on that same thread, so they
//! need a `LocalSet`.
//!
//! ## Modules
//!
//! - [`reactive`] - Cells, subscriptions, the `Reactive` capability
//! - [`component`] - Models, the binding adapter, a minimal mount host
//! - [`transport`] - Events, messages and the connection traits
//! - [`client`] - Connection slot, event classifier, request batcher, config
//! - [`nav`] - Page trait and `jump`
//! - [`debounce`] - Trailing-edge debounce

pub mod client;
pub mod component;
pub mod debounce;
pub mod error;
pub mod nav;
pub mod reactive;
pub mod transport;

pub use client::{Batcher, Classifier, Client, Config, ConfigHandle, Flow, Link};
pub use component::{bond, mount, Bond, Component, Fields, Model, Mounted, Updater};
pub use debounce::{debounce, Debounced};
pub use error::{Error, Result};
pub use nav::{jump, Page};
pub use reactive::{cell, on, Cell, Reactive, Subscription};
pub use transport::{
    ChangeSet, Connection, ConnectionEvent, Connector, EventHandler, Message, EVENTS_KEY,
};
