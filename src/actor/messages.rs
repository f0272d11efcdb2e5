//! Actor message definitions.
//!
//! ```text
//! FsActor --Reload--> WsActor --broadcast--> Clients
//! ```

use serde::Serialize;

/// An HTTP connection upgraded to a raw WebSocket stream.
pub type SessionStream = Box<dyn tiny_http::ReadWrite + Send>;

/// Messages to the WebSocket actor.
pub enum WsMsg {
    /// Broadcast a reload to all connected viewers
    Reload { reason: String },
    /// Register an upgraded connection
    AddClient(SessionStream),
    /// Close all connections and stop
    Shutdown,
}

/// Wire message pushed to browser clients.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PushMessage {
    /// Handshake acknowledgement sent on connect
    Connected,
    /// The source document changed; refetch and re-render
    Reload { reason: String },
}

impl PushMessage {
    pub fn reload(reason: &str) -> Self {
        Self::Reload {
            reason: reason.to_string(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"type":"reload"}"#.to_string())
    }
}
