use anyhow::{Result, bail};
use larder_runtime::{BackendKind, InitOptions, Larder};
use std::path::PathBuf;

use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters::present_init_result;
use crate::types::BackendArg;

pub fn handle(
    ctx: &ExecutionContext,
    backend: BackendArg,
    sync_path: Option<PathBuf>,
    force: bool,
) -> Result<()> {
    let backend = BackendKind::from(backend);
    if backend == BackendKind::Local && sync_path.is_some() {
        bail!("--sync-path only applies to --backend sync");
    }

    let result = Larder::init(
        ctx.data_dir(),
        InitOptions {
            backend,
            sync_path,
            force,
        },
    )?;

    ctx.renderer().render(present_init_result(result))
}
