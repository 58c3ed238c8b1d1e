use anyhow::{Result, bail};
use larder_runtime::SaveOutcome;
use larder_types::parse_date_relative;

use super::{Lookup, lookup};
use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters::{present_item_change, present_not_found, present_notice};
use crate::presentation::view_models::{ItemAction, StatusBadge};
use crate::types::LocationArg;

pub fn handle(
    ctx: &ExecutionContext,
    query: String,
    name: Option<String>,
    date: Option<String>,
    location: Option<LocationArg>,
) -> Result<()> {
    if name.is_none() && date.is_none() && location.is_none() {
        bail!("Nothing to change: pass --name, --date or --location");
    }

    let today = ctx.today()?;
    let date = date
        .map(|text| parse_date_relative(&text, today))
        .transpose()?;

    let mut larder = ctx.open()?;
    let id = match lookup(&larder, &query)? {
        Lookup::Found(id) => id,
        Lookup::Missing => return ctx.renderer().render(present_not_found(&query)),
    };

    let controller = larder.controller_mut();
    if !controller.open_for_edit(&id) {
        return ctx.renderer().render(present_not_found(&query));
    }
    if let Some(name) = name {
        controller.set_name(name);
    }
    if let Some(date) = date {
        controller.set_date(Some(date));
    }
    if let Some(location) = location {
        controller.set_location(location.into());
    }

    match controller.save()? {
        SaveOutcome::Updated(item) => ctx
            .renderer()
            .render(present_item_change(ItemAction::Updated, item, today)),
        SaveOutcome::Vanished(_) => ctx.renderer().render(present_notice(
            StatusBadge::warning("Item not found"),
            "The item was deleted while editing; nothing changed",
        )),
        other => bail!("unexpected save outcome: {:?}", other),
    }
}
