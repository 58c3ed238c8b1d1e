use anyhow::{Result, bail};
use tracing::info;

use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters::{present_listing, present_shelves};
use crate::presentation::view_models::OutputFormat;

/// Print the shelves, then again after every external change. Runs until
/// interrupted.
pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let mut larder = ctx.open()?;
    let poll_interval = larder.config().storage.poll_interval();
    let storage_path = larder.storage_path();

    let controller = larder.controller_mut();
    if !controller.start_sync()? {
        bail!(
            "The {} backend has no live updates; `watch` needs the sync backend (larder init --backend sync)",
            controller.store().backend_name()
        );
    }

    if ctx.format() == OutputFormat::Text {
        eprintln!("Watching {} (Ctrl+C to stop)", storage_path.display());
    }
    info!(path = %storage_path.display(), "watching for external changes");

    let renderer = ctx.renderer();
    let today = ctx.today()?;
    renderer.render(present_listing(present_shelves(
        &controller.shelves(today),
        today,
    )))?;

    loop {
        std::thread::sleep(poll_interval);
        if controller.poll_sync().changed {
            let today = ctx.today()?;
            if ctx.format() == OutputFormat::Text {
                println!();
            }
            renderer.render(present_listing(present_shelves(
                &controller.shelves(today),
                today,
            )))?;
        }
    }
}
