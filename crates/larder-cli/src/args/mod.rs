// NOTE: Command Organization Rationale
//
// Why flat subcommands (not namespaced)?
// - There is one noun (item) and a handful of verbs; `larder add` reads
//   better than `larder item add`
// - `list` is the default so a bare `larder` shows the shelves

mod commands;

pub use commands::*;

use clap::Parser;

use crate::types::{LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Track perishables in the fridge, freezer and pantry", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory [default: $LARDER_PATH, then the platform data dir]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Log verbosity on stderr (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExportFormat, LocationArg};
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["larder"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Plain);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_add_defaults_to_fridge() {
        let cli = Cli::try_parse_from(["larder", "add", "Milk"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                name,
                date,
                location,
            }) => {
                assert_eq!(name, "Milk");
                assert_eq!(date, None);
                assert_eq!(location, LocationArg::Fridge);
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["larder", "export", "csv", "--format", "json", "-o", "out.csv"])
                .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Some(Commands::Export { kind, output }) => {
                assert_eq!(kind, ExportFormat::Csv);
                assert_eq!(output.unwrap().to_str(), Some("out.csv"));
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_unknown_location_is_rejected() {
        assert!(Cli::try_parse_from(["larder", "add", "Milk", "--location", "garage"]).is_err());
    }
}
