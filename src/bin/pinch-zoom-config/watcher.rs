//! File watcher that signals whenever an options file is written.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

/// Editors save in several steps; events this close together count as one change.
const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Watches a single options file for changes.
pub struct OptionsWatcher {
    /// Receiver for change notifications from the file watcher
    change_rx: Receiver<()>,
    /// The watcher must be kept alive for events to fire
    _watcher: RecommendedWatcher,
}

impl OptionsWatcher {
    /// Starts watching `path`.
    ///
    /// The parent directory is watched rather than the file itself, so
    /// atomic saves (write to a temp file, then rename) are still seen and
    /// the file need not exist yet.
    pub fn new(path: &Path) -> notify::Result<Self> {
        let file_name = path.file_name().map(|name| name.to_os_string());
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let (change_tx, change_rx) = mpsc::channel();

        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            match res {
                Ok(event) => {
                    if matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
                        && event
                            .paths
                            .iter()
                            .any(|changed| changed.file_name() == file_name.as_deref())
                    {
                        let _ = change_tx.send(());
                    }
                }
                Err(err) => log::warn!("File watch error: {err}"),
            }
        })?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        log::info!("Watching options file: {}", path.display());

        Ok(Self {
            change_rx,
            _watcher: watcher,
        })
    }

    /// Blocks until the file changes. Returns `false` once no more changes can arrive.
    pub fn wait_for_change(&self) -> bool {
        if self.change_rx.recv().is_err() {
            return false;
        }

        thread::sleep(SETTLE_DELAY);

        // Drain the rest of the burst
        loop {
            match self.change_rx.try_recv() {
                Ok(()) => {}
                Err(TryRecvError::Empty) => return true,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Options watcher channel disconnected");
                    return false;
                }
            }
        }
    }
}
