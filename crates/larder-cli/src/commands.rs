use anyhow::Result;
use larder_runtime::resolve_workspace_path;

use super::args::{Cli, Commands};
use super::context::ExecutionContext;
use super::handlers;
use super::logging;
use super::types::LogLevel;

pub fn run(cli: Cli) -> Result<()> {
    // Log lines would tear the alternate screen; keep the UI quiet unless
    // a level was asked for explicitly.
    let level = match (&cli.command, cli.log_level) {
        (Some(Commands::Ui), LogLevel::Warn) => LogLevel::Error,
        (_, level) => level,
    };
    logging::init(level);

    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir, cli.format);

    let Some(command) = cli.command else {
        return handlers::list::handle(&ctx, None);
    };

    match command {
        Commands::Init {
            backend,
            sync_path,
            force,
        } => handlers::init::handle(&ctx, backend, sync_path, force),

        Commands::Add {
            name,
            date,
            location,
        } => handlers::add::handle(&ctx, name, date, location),

        Commands::Edit {
            id,
            name,
            date,
            location,
        } => handlers::edit::handle(&ctx, id, name, date, location),

        Commands::Rm { id, yes } => handlers::rm::handle(&ctx, id, yes),

        Commands::List { location } => handlers::list::handle(&ctx, location),

        Commands::Export { kind, output } => handlers::export::handle(&ctx, kind, output),

        Commands::Watch => handlers::watch::handle(&ctx),

        Commands::Ui => handlers::ui::handle(&ctx),
    }
}
