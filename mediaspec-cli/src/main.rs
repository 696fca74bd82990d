// mediaspec-cli/src/main.rs
//
// Entry point for the `mediaspec` binary.
//
// Responsibilities include:
// - Parsing user-provided arguments.
// - Setting up logging on stderr.
// - Dispatching to the selected command.
// - Reporting errors and setting the process exit code.

use clap::Parser;
use log::debug;
use mediaspec_cli::logging::init_logging;
use mediaspec_cli::output::print_error;
use mediaspec_cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("Parsed arguments: {:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
