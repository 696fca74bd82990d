// ============================================================================
// mediaspec-cli/src/commands/validate.rs
// ============================================================================
//
// VALIDATE COMMAND: Check Documents Against Field Constraints
//
// Documents are loaded and validated in parallel with rayon, then reported in
// the order they were given. The validation policy starts from the
// environment (MEDIASPEC_VALIDATION_MODE, MEDIASPEC_ALLOW_UNKNOWN_TOKENS) and
// the command-line flags can only tighten the mode or relax token checks.
//
// A run fails when any document cannot be read, or when strict mode rejects
// a document.

use crate::cli::ValidateArgs;
use crate::error::{CliError, CliResult};
use crate::output::{print_error, print_failure, print_validation_report};
use log::info;
use mediaspec_core::document::load_any;
use mediaspec_core::{
    CoreError, CoreResult, ModelConfig, ModelConfigBuilder, ValidationMode, ValidationReport,
};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Builds the validation policy for this run.
pub fn validation_config(base: ModelConfig, args: &ValidateArgs) -> ModelConfig {
    let mut builder = ModelConfigBuilder::from_config(base);
    if args.strict {
        builder = builder.validation_mode(ValidationMode::Strict);
    }
    if args.allow_unknown_tokens {
        builder = builder.allow_unknown_tokens(true);
    }
    builder.build()
}

fn check_document(
    args: &ValidateArgs,
    path: &Path,
    config: &ModelConfig,
) -> CoreResult<ValidationReport> {
    load_any(args.kind, path)?.validate_with(config)
}

/// Runs the `validate` command.
pub fn run_validate(args: &ValidateArgs) -> CliResult<()> {
    let config = validation_config(ModelConfig::from_env(), args);
    info!(
        "Validating {} document(s) as {} ({:?} mode)",
        args.files.len(),
        args.kind.record_name(),
        config.validation_mode
    );

    let results: Vec<(&PathBuf, CoreResult<ValidationReport>)> = args
        .files
        .par_iter()
        .map(|path| (path, check_document(args, path, &config)))
        .collect();

    let mut failed = 0;
    for (path, result) in &results {
        match result {
            Ok(report) => print_validation_report(path, report),
            Err(err @ CoreError::Validation { .. }) => {
                failed += 1;
                print_failure(&format!("{}: {}", path.display(), err));
            }
            Err(err) => {
                failed += 1;
                print_error(&format!("{}: {}", path.display(), err));
            }
        }
    }

    if failed > 0 {
        return Err(CliError::ValidationFailed {
            failed,
            total: results.len(),
        }
        .into());
    }
    Ok(())
}
