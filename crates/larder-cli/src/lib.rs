// NOTE: larder Architecture Rationale
//
// Why a controller between the CLI and the store?
// - The interactive UI and the one-shot commands share one set of rules
//   (validation, NotFound handling, delete confirmation)
// - Commands are just scripted controller sessions: open form, fill, save
//
// Why recompute shelves on every render?
// - Urgency depends on "today"; a cached grouping goes stale at midnight
// - The collection is small, a full pass is cheaper than invalidation logic
//
// Why is "not found" a warning and not a failure?
// - With the sync backend another device may delete an item between
//   listing and editing; the user's intent (item gone) is already satisfied

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
