//! `scaffold` and `init` commands.

use std::sync::Arc;

use anyhow::Result;

use crate::{
    config::WcgenConfig,
    log,
    render::render_app_shell,
    scaffold::{ScaffoldOutcome, create_app_shell},
};

/// Write the app shell, or explain how to merge it into an existing one.
///
/// With `dry`, only prints what would be written.
pub fn scaffold(config: &WcgenConfig, dry: bool) -> Result<()> {
    if dry {
        print!("{}", render_app_shell(&config.bundle_url()));
        return Ok(());
    }

    match create_app_shell(config)? {
        ScaffoldOutcome::Created(path) => {
            log!("scaffold"; "created {}", config.root_relative(&path).display());
        }
        ScaffoldOutcome::Exists { path, content } => {
            log!(
                "scaffold";
                "{} already exists, leaving it untouched",
                config.root_relative(&path).display()
            );
            log!(
                "scaffold";
                "make sure it loads the bundle, e.g.:"
            );
            print!("{content}");
        }
    }
    Ok(())
}

/// Scaffold the app shell, then build once.
pub fn init(config: Arc<WcgenConfig>) -> Result<()> {
    scaffold(&config, false)?;
    super::build::build(config)
}
