use anyhow::{Result, bail};
use larder_runtime::SaveOutcome;
use larder_types::parse_date_relative;

use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters::present_item_change;
use crate::presentation::view_models::ItemAction;
use crate::types::LocationArg;

pub fn handle(
    ctx: &ExecutionContext,
    name: String,
    date: Option<String>,
    location: LocationArg,
) -> Result<()> {
    let today = ctx.today()?;
    let date = match date {
        Some(text) => parse_date_relative(&text, today)?,
        None => today,
    };

    let mut larder = ctx.open()?;
    let controller = larder.controller_mut();
    controller.open_for_add(today);
    controller.set_name(name);
    controller.set_date(Some(date));
    controller.set_location(location.into());

    match controller.save()? {
        SaveOutcome::Added(item) => ctx
            .renderer()
            .render(present_item_change(ItemAction::Added, item, today)),
        other => bail!("unexpected save outcome: {:?}", other),
    }
}
