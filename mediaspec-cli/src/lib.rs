// mediaspec-cli/src/lib.rs
//
// Library portion of the mediaspec CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands};
pub use error::{CliError, CliResult};

/// Dispatches a parsed command line to its command.
pub fn run(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Kinds => commands::run_kinds(),
        Commands::Fields(args) => commands::run_fields(args),
        Commands::Describe(args) => commands::run_describe(args)?,
        Commands::Set(args) => commands::run_set(args)?,
        Commands::Validate(args) => commands::run_validate(args)?,
    }
    Ok(())
}
