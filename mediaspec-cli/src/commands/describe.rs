// mediaspec-cli/src/commands/describe.rs
//
// Implementation of the `describe` command.

use crate::cli::DescribeArgs;
use crate::error::CliResult;
use anyhow::Context;
use mediaspec_core::document::load_any;

/// Prints the single-line dump of a document.
pub fn run_describe(args: &DescribeArgs) -> CliResult<()> {
    let record = load_any(args.kind, &args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    println!("{}", record.describe());
    Ok(())
}
