use clap::Subcommand;
use std::path::PathBuf;

use crate::types::{BackendArg, ExportFormat, LocationArg};

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Write config.toml and choose where items are stored")]
    Init {
        #[arg(long, default_value = "local")]
        backend: BackendArg,

        /// Shared document for the sync backend [default: <data-dir>/larder.json]
        #[arg(long)]
        sync_path: Option<PathBuf>,

        /// Overwrite an existing config.toml
        #[arg(long)]
        force: bool,
    },

    #[command(about = "Add an item")]
    Add {
        name: String,

        /// Expiry date: YYYY-MM-DD, today, tomorrow or +N days [default: today]
        #[arg(long, short)]
        date: Option<String>,

        #[arg(long, short, default_value = "fridge")]
        location: LocationArg,
    },

    #[command(about = "Change name, date or location of an item")]
    Edit {
        /// Item id or unique id prefix
        id: String,

        #[arg(long, short)]
        name: Option<String>,

        #[arg(long, short)]
        date: Option<String>,

        #[arg(long, short)]
        location: Option<LocationArg>,
    },

    #[command(about = "Delete an item", visible_alias = "delete")]
    Rm {
        /// Item id or unique id prefix
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    #[command(about = "Show items grouped by location, soonest expiry first")]
    List {
        #[arg(long, short)]
        location: Option<LocationArg>,
    },

    #[command(about = "Export the shelves as JSON, CSV or HTML")]
    Export {
        #[arg(value_name = "FORMAT")]
        kind: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    #[command(about = "Reprint the shelves whenever another device changes them")]
    Watch,

    #[command(about = "Interactive terminal UI")]
    Ui,
}
