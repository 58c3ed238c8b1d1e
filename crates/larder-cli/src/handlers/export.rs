use anyhow::{Context as _, Result};
use std::io::Write;
use std::path::PathBuf;

use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::formatters::{to_csv, to_html, to_json};
use crate::presentation::presenters::{present_export_result, present_shelves};
use crate::types::ExportFormat;

pub fn handle(ctx: &ExecutionContext, kind: ExportFormat, output: Option<PathBuf>) -> Result<()> {
    let today = ctx.today()?;
    let larder = ctx.open()?;
    let vm = present_shelves(&larder.controller().shelves(today), today);

    let document = match kind {
        ExportFormat::Json => to_json(&vm)?,
        ExportFormat::Csv => to_csv(&vm)?,
        ExportFormat::Html => to_html(&vm)?,
    };

    let Some(path) = output else {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        out.write_all(document.as_bytes())?;
        if !document.ends_with('\n') {
            writeln!(out)?;
        }
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, document)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    ctx.renderer()
        .render(present_export_result(&kind.to_string(), &path, vm.total))
}
