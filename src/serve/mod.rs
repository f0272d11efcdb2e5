//! Local viewer server with live reload.
//!
//! `run` resolves the source document, renders the spreadsheet once,
//! binds the HTTP server, and spawns the actor system. The request loop
//! serves the embedded viewer page, the document as JSON, and the
//! WebSocket upgrade, all on one port.

mod lifecycle;
pub mod refresh;
mod response;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use crossbeam::channel;
use tiny_http::{Request, Server};

use crate::cli::Cli;
use crate::log;
use crate::matrix;
use crate::xlsx;

/// Resolved paths shared by the request loop and the watcher.
pub struct ServeContext {
    /// Source document (JSON)
    pub source: PathBuf,
    /// Spreadsheet written next to the source
    pub output: PathBuf,
}

pub fn run(cli: &Cli) -> Result<()> {
    let source = matrix::resolve_file(cli.file.as_deref())?;
    let output = xlsx::xlsx_output_path(&source);
    log!("serve"; "watching {}", source.display());

    let ctx = Arc::new(ServeContext { source, output });

    // First pass before the server comes up. A broken document is
    // reported but does not abort; the watcher picks up the fix.
    refresh::refresh_and_report(&ctx);

    let (server, addr) = lifecycle::bind_server(cli.port)?;
    let server = Arc::new(server);

    let (shutdown_tx, shutdown_rx) = channel::unbounded::<()>();
    crate::core::register_server(Arc::clone(&server), shutdown_tx);

    log!("serve"; "http://{}", addr);

    let actor_handle = lifecycle::spawn_actors(Arc::clone(&ctx), shutdown_rx);
    run_request_loop(&server, &ctx);
    lifecycle::wait_for_shutdown(actor_handle);
    Ok(())
}

fn run_request_loop(server: &Server, ctx: &Arc<ServeContext>) {
    // Thread pool so a slow client can't block the watcher's viewers
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .expect("failed to create thread pool");

    for request in server.incoming_requests() {
        let ctx = Arc::clone(ctx);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &ctx) {
                log!("serve"; "request error: {e}");
            }
        });
    }
}

/// Handle a single HTTP request.
fn handle_request(request: Request, ctx: &ServeContext) -> Result<()> {
    // Early exit if shutdown requested
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    let path = request.url().split('?').next().unwrap_or("/");
    match path {
        "/" | "/index.html" => response::respond_viewer(request),
        "/api/matrix" => response::respond_matrix(request, &ctx.source),
        "/ws" => response::upgrade_websocket(request),
        _ => response::respond_not_found(request),
    }
}
