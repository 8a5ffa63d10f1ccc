//! Connection event types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One classified message arriving from the transport.
///
/// Tagged with `"t"` so a JSON transport can decode it directly:
/// `{"t": "busy"}`, `{"t": "config", "username": "u", "editable": true}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ConnectionEvent {
    /// A regular server message.
    Receive {
        #[serde(default)]
        data: Value,
    },

    /// The server reported an error.
    Error {
        #[serde(default)]
        info: Value,
    },

    /// The server raised an unhandled exception.
    Exception {
        #[serde(default)]
        info: Value,
    },

    /// The channel closed or could not be opened.
    Disconnect {
        #[serde(default)]
        info: Value,
    },

    /// Discard all client state.
    Reset,

    /// Session configuration.
    Config {
        #[serde(default)]
        username: String,
        #[serde(default)]
        editable: bool,
    },

    /// Server-side argument echo.
    Send {
        #[serde(default)]
        data: Value,
    },

    /// The server started processing a request.
    Busy,

    /// The server finished processing.
    Free,
}

impl ConnectionEvent {
    /// Short lowercase name, matching the serde tag.
    pub fn kind(&self) -> &'static str {
        match self {
            ConnectionEvent::Receive { .. } => "receive",
            ConnectionEvent::Error { .. } => "error",
            ConnectionEvent::Exception { .. } => "exception",
            ConnectionEvent::Disconnect { .. } => "disconnect",
            ConnectionEvent::Reset => "reset",
            ConnectionEvent::Config { .. } => "config",
            ConnectionEvent::Send { .. } => "send",
            ConnectionEvent::Busy => "busy",
            ConnectionEvent::Free => "free",
        }
    }

    /// True for the events that report a failure as data.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ConnectionEvent::Error { .. }
                | ConnectionEvent::Exception { .. }
                | ConnectionEvent::Disconnect { .. }
        )
    }
}
