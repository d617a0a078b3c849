//! `watch` command: initial build, then rebuild on component changes.

use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};

use super::build::{make_pipeline, summarize};
use crate::{
    config::WcgenConfig,
    log,
    watch::{Job, WatchSession, report},
};

/// Watch the component directory until Ctrl+C.
///
/// A failing build (initial or later) is reported and watching continues.
pub fn watch(config: Arc<WcgenConfig>) -> Result<()> {
    let dir = config.components_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;

    let pipeline = Arc::new(make_pipeline(Arc::clone(&config)));
    let job: Job = {
        let pipeline = Arc::clone(&pipeline);
        Arc::new(move || -> Result<String> {
            let report = pipeline.run()?;
            Ok(summarize(pipeline.config(), &report))
        })
    };

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    rt.block_on(async move {
        // Attach before the initial build so edits made meanwhile are not lost.
        let session = WatchSession::new(&dir, config.debounce())
            .with_context(|| format!("Failed to watch '{}'", dir.display()))?;
        let stop = session.stop_signal();
        ctrlc::set_handler(move || stop.stop()).context("Failed to set Ctrl+C handler")?;

        let initial = Arc::clone(&job);
        report(tokio::task::spawn_blocking(move || initial()).await?);

        log!(
            "watch";
            "watching {} (Ctrl+C to stop)",
            config.root_relative(&dir).display()
        );
        session.run(job).await;
        log!("watch"; "stopped");
        Ok::<_, anyhow::Error>(())
    })
}
