//! Error types surfaced by the client API.
//!
//! Transport failures never show up here: they arrive as
//! [`ConnectionEvent`](crate::transport::ConnectionEvent) data and are routed
//! like any other event. What remains are usage errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A change set was requested before any transport was attached.
    #[error("not initialized: no transport connected")]
    NotConnected,
}
