// ============================================================================
// mediaspec-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types for the CLI
//
// Core failures are carried through `anyhow` with the document path attached
// as context. The errors below are the ones only the CLI can produce.
//
// KEY COMPONENTS:
// - CliResult: Type alias for CLI operations
// - CliError: Malformed arguments and failed validation runs

use thiserror::Error;

/// Type alias for CLI results.
pub type CliResult<T> = anyhow::Result<T>;

/// Errors raised by the CLI itself.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    #[error("Invalid assignment '{0}': expected FIELD=VALUE")]
    InvalidAssignment(String),

    #[error("{failed} of {total} document(s) failed validation")]
    ValidationFailed { failed: usize, total: usize },
}
