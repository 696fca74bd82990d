// mediaspec-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use mediaspec_core::RecordKind;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Mediaspec: settings documents for transcoding jobs",
    long_about = "Inspects, edits and validates transcoding settings documents using the mediaspec-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug output
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lists every record kind
    Kinds,
    /// Lists the fields of a record kind with their constraints
    Fields(FieldsArgs),
    /// Prints the single-line dump of a settings document
    Describe(DescribeArgs),
    /// Writes fields into a settings document
    Set(SetArgs),
    /// Checks settings documents against their field constraints
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
pub struct FieldsArgs {
    /// Record kind, e.g. h264-settings
    #[arg(value_name = "KIND")]
    pub kind: RecordKind,
}

#[derive(Parser, Debug)]
pub struct DescribeArgs {
    /// Record kind, e.g. h264-settings
    #[arg(value_name = "KIND")]
    pub kind: RecordKind,

    /// JSON document to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct SetArgs {
    /// Record kind, e.g. h264-settings
    #[arg(value_name = "KIND")]
    pub kind: RecordKind,

    /// JSON document to start from (an empty record is used if it does not exist)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Assignments such as Bitrate=5000000 or RateControlMode=QVBR
    #[arg(value_name = "FIELD=VALUE")]
    pub assignments: Vec<String>,

    /// Field to clear (may be repeated)
    #[arg(long = "clear", value_name = "FIELD")]
    pub clear: Vec<String>,

    /// Where to write the result (defaults to stdout)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Record kind, e.g. h264-settings
    #[arg(value_name = "KIND")]
    pub kind: RecordKind,

    /// JSON documents to check
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Fail on any violation instead of reporting it
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Do not report tokens the record does not list
    #[arg(long, default_value_t = false)]
    pub allow_unknown_tokens: bool,
}
