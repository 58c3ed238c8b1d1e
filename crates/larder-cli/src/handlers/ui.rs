use anyhow::{Result, bail};
use is_terminal::IsTerminal;

use crate::context::ExecutionContext;
use crate::presentation::renderers::tui;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("`larder ui` needs an interactive terminal; use `larder list` instead");
    }

    // Surface a bad LARDER_TODAY before the screen switches.
    ctx.today()?;

    let mut larder = ctx.open()?;
    let controller = larder.controller_mut();
    controller.start_sync()?;

    tui::run(controller, || {
        ctx.today()
            .unwrap_or_else(|_| larder_engine::today_local())
    })
}
