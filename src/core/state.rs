//! Serve-mode process state.
//!
//! Two concerns live here:
//! - `SHUTDOWN`: has Ctrl+C been received? (checked by the request loop
//!   and the watcher)
//! - handles the Ctrl+C handler needs to reach: the blocked HTTP server
//!   and the actor shutdown channel
//!
//! The WebSocket sender is also registered here so the synchronous
//! request loop can hand upgraded connections to the async actor.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use tiny_http::Server;
use tokio::sync::mpsc;

use crate::actor::WsMsg;

/// Shutdown has been requested (Ctrl+C received)
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// HTTP server reference for graceful shutdown
static SERVER: OnceLock<Arc<Server>> = OnceLock::new();

/// Shutdown signal sender for the actor system
static SHUTDOWN_TX: OnceLock<crossbeam::channel::Sender<()>> = OnceLock::new();

/// Channel into the WebSocket actor (registered once the actor system is up)
static WS_TX: OnceLock<mpsc::Sender<WsMsg>> = OnceLock::new();

/// Setup the global Ctrl+C handler. Call once at program start.
///
/// The handler behavior depends on whether a server has been registered:
/// - Before `register_server()`: exits immediately (nothing to unwind)
/// - After `register_server()`: graceful shutdown (unblock server, notify
///   actors)
pub fn setup_shutdown_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        SHUTDOWN.store(true, Ordering::SeqCst);

        if let Some(tx) = SHUTDOWN_TX.get() {
            let _ = tx.send(());
        }

        if let Some(server) = SERVER.get() {
            crate::log!("serve"; "shutting down...");
            server.unblock();
        } else {
            std::process::exit(0);
        }
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}

/// Register the HTTP server for graceful shutdown.
///
/// Call this after binding the server, before entering the request loop.
pub fn register_server(server: Arc<Server>, shutdown_tx: crossbeam::channel::Sender<()>) {
    let _ = SERVER.set(server);
    let _ = SHUTDOWN_TX.set(shutdown_tx);
}

/// Check if shutdown has been requested.
///
/// Uses Relaxed ordering; worst case is serving a few more requests
/// before stopping.
pub fn is_shutdown() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

/// Register the WebSocket actor inbox (called once the actor system is up).
pub fn register_ws_sender(tx: mpsc::Sender<WsMsg>) {
    let _ = WS_TX.set(tx);
}

/// Channel into the WebSocket actor, if the actor system is running.
pub fn ws_sender() -> Option<&'static mpsc::Sender<WsMsg>> {
    WS_TX.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_flag() {
        SHUTDOWN.store(false, Ordering::SeqCst);
        assert!(!is_shutdown());

        SHUTDOWN.store(true, Ordering::SeqCst);
        assert!(is_shutdown());

        SHUTDOWN.store(false, Ordering::SeqCst);
    }
}
