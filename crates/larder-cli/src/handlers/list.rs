use anyhow::Result;
use larder_types::Location;

use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters::{present_listing, present_shelves};
use crate::types::LocationArg;

pub fn handle(ctx: &ExecutionContext, location: Option<LocationArg>) -> Result<()> {
    let today = ctx.today()?;
    let larder = ctx.open()?;

    let mut shelves = larder.controller().shelves(today);
    if let Some(location) = location {
        shelves = shelves.only(location.into());
    }

    let mut vm = present_shelves(&shelves, today);
    if let Some(location) = location {
        let keep = Location::from(location).to_string();
        vm.shelves.retain(|shelf| shelf.location == keep);
    }

    ctx.renderer().render(present_listing(vm))
}
