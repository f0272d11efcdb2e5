//! Server lifecycle management.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use anyhow::Result;
use crossbeam::channel::Receiver;
use tiny_http::Server;

use crate::actor::Coordinator;
use crate::log;

use super::ServeContext;

/// Bind the HTTP server on localhost. The port is taken as given; a bind
/// failure is fatal.
pub fn bind_server(port: u16) -> Result<(Server, SocketAddr)> {
    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
    let server =
        Server::http(addr).map_err(|e| anyhow::anyhow!("failed to bind {}: {}", addr, e))?;
    Ok((server, addr))
}

/// Spawn the actor system for file watching and live reload.
pub fn spawn_actors(ctx: Arc<ServeContext>, shutdown_rx: Receiver<()>) -> JoinHandle<()> {
    thread::spawn(move || run_actor_system(ctx, shutdown_rx))
}

fn run_actor_system(ctx: Arc<ServeContext>, shutdown_rx: Receiver<()>) {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    rt.block_on(async {
        let coordinator = Coordinator::with_context(ctx).with_shutdown_signal(shutdown_rx);
        if let Err(e) = coordinator.run().await {
            log!("actor"; "error: {}", e);
        }
    });
}

/// Wait for the actor system to shut down gracefully (max 2 seconds).
pub fn wait_for_shutdown(handle: JoinHandle<()>) {
    for _ in 0..40 {
        if handle.is_finished() {
            let _ = handle.join();
            return;
        }
        thread::sleep(std::time::Duration::from_millis(50));
    }
}
