use anyhow::{Context as _, Result};
use std::io::{self, BufRead, Write};

use super::{Lookup, lookup};
use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::formatters::sanitize;
use crate::presentation::presenters::{present_item_change, present_not_found, present_notice};
use crate::presentation::view_models::{ItemAction, StatusBadge};

pub fn handle(ctx: &ExecutionContext, query: String, yes: bool) -> Result<()> {
    let today = ctx.today()?;
    let mut larder = ctx.open()?;
    let id = match lookup(&larder, &query)? {
        Lookup::Found(id) => id,
        Lookup::Missing => return ctx.renderer().render(present_not_found(&query)),
    };

    let controller = larder.controller_mut();
    if !controller.request_delete(&id) {
        return ctx.renderer().render(present_not_found(&query));
    }

    if !yes {
        let Some(item) = controller.pending_delete() else {
            return ctx.renderer().render(present_not_found(&query));
        };
        let question = format!(
            "Delete {} ({}, {})?",
            sanitize(&item.name),
            item.location,
            item.date
        );
        let name = item.name.clone();
        if !confirm(&question)? {
            controller.decline_delete();
            return ctx.renderer().render(present_notice(
                StatusBadge::info("Nothing deleted"),
                format!("Kept {}", name),
            ));
        }
    }

    match controller.confirm_delete()? {
        Some(item) => ctx
            .renderer()
            .render(present_item_change(ItemAction::Removed, item, today)),
        None => ctx.renderer().render(present_not_found(&query)),
    }
}

/// Ask on stderr, read one line from stdin. Anything but y/yes declines,
/// including end of input.
fn confirm(question: &str) -> Result<bool> {
    eprint!("{} [y/N] ", question);
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
