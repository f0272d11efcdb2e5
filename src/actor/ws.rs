//! WebSocket actor.
//!
//! Owns every upgraded viewer connection and broadcasts reload messages
//! to all of them. Dead connections are dropped on the first failed send.

use tokio::sync::mpsc;
use tungstenite::WebSocket;
use tungstenite::protocol::{Message, Role};

use super::messages::{PushMessage, SessionStream, WsMsg};

/// WebSocket actor - manages viewer connections and broadcasts.
pub struct WsActor {
    /// Channel to receive messages
    rx: mpsc::Receiver<WsMsg>,
    /// Connected viewers
    clients: Vec<WebSocket<SessionStream>>,
}

impl WsActor {
    pub fn new(rx: mpsc::Receiver<WsMsg>) -> Self {
        Self {
            rx,
            clients: Vec::new(),
        }
    }

    /// Run the actor event loop.
    pub async fn run(mut self) {
        while let Some(msg) = self.rx.recv().await {
            match msg {
                WsMsg::Reload { reason } => {
                    crate::debug!("ws"; "sending reload: {}", reason);
                    self.broadcast(Message::Text(PushMessage::reload(&reason).to_json().into()));
                }

                WsMsg::AddClient(stream) => {
                    self.add_client(stream);
                }

                WsMsg::Shutdown => {
                    crate::debug!("ws"; "shutting down");
                    for mut client in self.clients.drain(..) {
                        let _ = client.close(None);
                    }
                    break;
                }
            }
        }
    }

    /// Wrap an already-upgraded stream. The HTTP layer has completed the
    /// handshake, so the socket joins in server role with no renegotiation.
    fn add_client(&mut self, stream: SessionStream) {
        let mut ws = WebSocket::from_raw_socket(stream, Role::Server, None);

        let connected = PushMessage::Connected.to_json();
        if let Err(e) = ws.send(Message::Text(connected.into())) {
            crate::log!("ws"; "failed to send connected message: {}", e);
            return;
        }

        crate::debug!("ws"; "client connected (total: {})", self.clients.len() + 1);
        self.clients.push(ws);
    }

    /// Broadcast a message to all connected viewers.
    fn broadcast(&mut self, msg: Message) {
        let count = self.clients.len();
        if count == 0 {
            crate::debug!("ws"; "no clients connected");
            return;
        }

        self.clients.retain_mut(|client| match client.send(msg.clone()) {
            Ok(_) => true,
            Err(e) => {
                crate::debug!("ws"; "client disconnected: {}", e);
                false
            }
        });
        crate::debug!("ws"; "broadcast to {} clients", count);
    }
}
