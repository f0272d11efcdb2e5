//! Live reload actor system.
//!
//! Two actors connected by channels:
//! - `FsActor` watches the source document and re-exports on change
//! - `WsActor` owns viewer connections and broadcasts reloads
//!
//! The `Coordinator` wires them up and runs them on the serve runtime.

mod fs;
mod messages;
mod ws;

pub use messages::{PushMessage, SessionStream, WsMsg};

use std::sync::Arc;

use anyhow::Result;
use crossbeam::channel::Receiver;
use tokio::sync::mpsc;

use fs::FsActor;
use ws::WsActor;

use crate::serve::ServeContext;

const CHANNEL_BUFFER: usize = 32;

/// Coordinator - wires up and runs the actor system.
pub struct Coordinator {
    ctx: Arc<ServeContext>,
    shutdown_rx: Option<Receiver<()>>,
}

impl Coordinator {
    pub fn with_context(ctx: Arc<ServeContext>) -> Self {
        Self {
            ctx,
            shutdown_rx: None,
        }
    }

    /// Set shutdown signal receiver.
    pub fn with_shutdown_signal(mut self, rx: Receiver<()>) -> Self {
        self.shutdown_rx = Some(rx);
        self
    }

    /// Run the actor system until shutdown.
    pub async fn run(mut self) -> Result<()> {
        let (ws_tx, ws_rx) = mpsc::channel::<WsMsg>(CHANNEL_BUFFER);

        // Let the request loop hand upgraded connections to the actor
        crate::core::register_ws_sender(ws_tx.clone());

        let fs_actor = FsActor::new(Arc::clone(&self.ctx), ws_tx.clone())
            .map_err(|e| anyhow::anyhow!("watcher failed: {}", e))?;
        let ws_actor = WsActor::new(ws_rx);

        crate::debug!("actor"; "start");
        let fs_handle = tokio::spawn(async move { fs_actor.run().await });
        let ws_handle = tokio::spawn(async move { ws_actor.run().await });

        if let Some(rx) = self.shutdown_rx.take() {
            loop {
                if rx.try_recv().is_ok() {
                    crate::debug!("actor"; "shutdown signal received");
                    break;
                }
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            }
        } else {
            let _ = fs_handle.await;
        }

        let _ = ws_tx.send(WsMsg::Shutdown).await;
        let _ = tokio::time::timeout(std::time::Duration::from_millis(500), ws_handle).await;

        crate::debug!("actor"; "stopped");
        Ok(())
    }
}
