//! Filesystem actor.
//!
//! Watches the source document and, on every relevant change, runs a full
//! load-and-export pass and tells the WebSocket actor to push a reload.
//! Events are not debounced: an editor that writes twice produces two
//! passes, each working from the file as it is on disk at that moment.

use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use super::messages::WsMsg;
use crate::serve::{ServeContext, refresh};

/// Filesystem actor - watches the source document.
pub struct FsActor {
    /// Channel to receive notify events (sync -> async bridge)
    notify_rx: std::sync::mpsc::Receiver<notify::Result<notify::Event>>,
    /// Watcher handle (must be kept alive)
    _watcher: RecommendedWatcher,
    /// Source and output paths
    ctx: Arc<ServeContext>,
    /// Channel to the WebSocket actor
    ws_tx: mpsc::Sender<WsMsg>,
}

impl FsActor {
    /// Create a new FsActor. The watcher starts immediately and buffers
    /// events until `run` drains them.
    ///
    /// The parent directory is watched rather than the file itself, so
    /// editors that replace the file via rename keep triggering events.
    pub fn new(ctx: Arc<ServeContext>, ws_tx: mpsc::Sender<WsMsg>) -> notify::Result<Self> {
        // Sync channel for notify (it doesn't support async)
        let (notify_tx, notify_rx) = std::sync::mpsc::channel();

        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = notify_tx.send(res);
        })?;

        let parent = ctx.source.parent().unwrap_or(Path::new("."));
        let watch_dir = if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        };
        watcher.watch(watch_dir, RecursiveMode::NonRecursive)?;

        Ok(Self {
            notify_rx,
            _watcher: watcher,
            ctx,
            ws_tx,
        })
    }

    /// Run the actor event loop.
    pub async fn run(self) {
        let notify_rx = self.notify_rx;
        let _watcher = self._watcher;

        let file_name = self
            .ctx
            .source
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();

        let (async_tx, mut async_rx) = mpsc::channel::<notify::Event>(64);

        // Thread to poll notify events and forward to the async channel
        std::thread::spawn(move || {
            while let Ok(result) = notify_rx.recv() {
                match result {
                    Ok(event) => {
                        if async_tx.blocking_send(event).is_err() {
                            break; // Receiver dropped
                        }
                    }
                    Err(e) => crate::log!("watch"; "notify error: {}", e),
                }
            }
        });

        while let Some(event) = async_rx.recv().await {
            if crate::core::is_shutdown() {
                break;
            }
            if !concerns_file(&event, &file_name) {
                continue;
            }
            crate::debug!("watch"; "{:?}: {:?}", event.kind, event.paths);

            // Full pass per event; a broken document still pushes a reload
            // so viewers see the current state.
            refresh::refresh_and_report(&self.ctx);

            let reason = format!("{} changed", file_name.to_string_lossy());
            if self.ws_tx.send(WsMsg::Reload { reason }).await.is_err() {
                break; // WsActor shut down
            }
        }
    }
}

/// Whether an event touches the watched document. Reads (`Access`) are
/// noise; everything else counts, whether the file was written in place,
/// replaced by rename, or briefly removed.
fn concerns_file(event: &notify::Event, file_name: &OsString) -> bool {
    if matches!(event.kind, EventKind::Access(_)) {
        return false;
    }
    if event.paths.is_empty() {
        return true; // rescan-style event, can't attribute
    }
    event
        .paths
        .iter()
        .any(|p| p.file_name().is_some_and(|n| n == file_name.as_os_str()))
}
