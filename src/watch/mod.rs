//! Component directory watcher.
//!
//! Turns filesystem notifications into debounced pipeline runs.
//!
//! ```text
//! notify → bridge thread → Debouncer (timing + exclusion) → blocking job
//! ```
//!
//! The watcher is attached as soon as the session is created, so changes made
//! while the caller performs the initial build are buffered rather than lost.
//! A failing job is reported and the session keeps watching; only the stop
//! signal ends it.

mod clock;
mod debouncer;


use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, anyhow};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::{Notify, mpsc};

use crate::logger::{status_error, status_success};
use crate::pipeline::PipelineError;
use clock::{Clock, SystemClock};
use debouncer::Debouncer;

/// Work run after each debounced burst. `Ok` carries a one-line summary.
pub type Job = Arc<dyn Fn() -> Result<String> + Send + Sync>;

/// Cloneable handle that ends a watch session.
#[derive(Debug, Clone)]
pub struct StopSignal(Arc<Notify>);

impl StopSignal {
    fn new() -> Self {
        Self(Arc::new(Notify::new()))
    }

    /// Request shutdown. Safe to call from any thread, before or during the loop.
    pub fn stop(&self) {
        self.0.notify_one();
    }
}

/// A watcher attached to one directory.
pub struct WatchSession {
    /// Channel to receive notify events (sync -> async bridge)
    notify_rx: std::sync::mpsc::Receiver<notify::Result<notify::Event>>,
    /// Watcher handle (must be kept alive)
    watcher: RecommendedWatcher,
    quiet: Duration,
    stop: StopSignal,
}

impl WatchSession {
    /// Attach a non-recursive watcher to `dir` immediately.
    pub fn new(dir: &Path, quiet: Duration) -> notify::Result<Self> {
        let (notify_tx, notify_rx) = std::sync::mpsc::channel();

        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = notify_tx.send(res);
        })?;
        watcher.watch(dir, RecursiveMode::NonRecursive)?;

        Ok(Self {
            notify_rx,
            watcher,
            quiet,
            stop: StopSignal::new(),
        })
    }

    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    /// Run the event loop until stopped.
    pub async fn run(self, job: Job) {
        let notify_rx = self.notify_rx;
        let (async_tx, async_rx) = mpsc::channel::<notify::Event>(64);

        // Spawn a thread to poll notify events and send to async channel
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

        let debouncer = Debouncer::new(SystemClock, self.quiet);
        watch_loop(async_rx, self.stop, debouncer, job).await;

        // Dropping the watcher closes notify_tx, which ends the bridge thread.
        drop(self.watcher);
    }
}

/// Core loop, independent of where events come from.
///
/// At most one job runs at a time. Changes arriving while a job runs are
/// coalesced into a single trailing run once it completes.
async fn watch_loop<C: Clock>(
    mut events: mpsc::Receiver<notify::Event>,
    stop: StopSignal,
    mut debouncer: Debouncer<C>,
    job: Job,
) {
    let (done_tx, mut done_rx) = mpsc::channel::<Result<String>>(1);

    loop {
        tokio::select! {
            biased;
            _ = stop.0.notified() => break,
            Some(result) = done_rx.recv() => {
                debouncer.finish();
                report(result);
            }
            Some(event) = events.recv() => {
                debouncer.add_event(&event);
            }
            _ = tokio::time::sleep(debouncer.sleep_duration()) => {
                let Some(changed) = debouncer.take_if_ready() else {
                    continue;
                };
                log_changes(&changed);
                spawn_job(Arc::clone(&job), done_tx.clone());
            }
        }
    }

    // Let an in-flight run finish writing before returning.
    if debouncer.is_running()
        && let Some(result) = done_rx.recv().await
    {
        report(result);
    }
}

/// Run the job on the blocking pool and send its outcome back to the loop.
fn spawn_job(job: Job, done_tx: mpsc::Sender<Result<String>>) {
    tokio::spawn(async move {
        let result = match tokio::task::spawn_blocking(move || job()).await {
            Ok(result) => result,
            Err(e) => Err(anyhow!("rebuild task failed: {e}")),
        };
        let _ = done_tx.send(result).await;
    });
}

fn log_changes(changed: &[PathBuf]) {
    match changed {
        [single] => {
            let name = single.file_name().unwrap_or(single.as_os_str());
            crate::debug!("watch"; "{} changed, rebuilding", name.to_string_lossy());
        }
        _ => crate::debug!("watch"; "{} files changed, rebuilding", changed.len()),
    }
}

/// Show the outcome of a run in the watch status block.
pub fn report(result: Result<String>) {
    match result {
        Ok(summary) => status_success(&summary),
        Err(e) => {
            let label = e
                .downcast_ref::<PipelineError>()
                .map_or("build failed", PipelineError::label);
            status_error(label, &format!("{e:#}"));
        }
    }
}
