// ============================================================================
// mediaspec-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger Configuration for the CLI
//
// The CLI logs through the standard `log` facade with `env_logger` as the
// backend. Log lines go to stderr so that documents printed on stdout stay
// machine-readable.
//
// USAGE:
// - default: info and above
// - --verbose: debug and above
// - RUST_LOG overrides both (e.g. RUST_LOG=mediaspec_core=trace)

use console::style;
use env_logger::{Builder, Env};
use log::{Level, LevelFilter};
use std::io::Write;

/// Returns the default filter for the given verbosity.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes env_logger with a timestamped, colored line format.
///
/// # Arguments
///
/// * `verbose` - Lower the default filter to debug
pub fn init_logging(verbose: bool) {
    let level = default_level(verbose);
    let env = Env::default().default_filter_or(level.as_str());

    Builder::from_env(env)
        .format(|buf, record| {
            let timestamp = buf.timestamp();
            let level = match record.level() {
                Level::Error => style("ERROR").red().bold(),
                Level::Warn => style("WARN ").yellow().bold(),
                Level::Info => style("INFO ").green(),
                Level::Debug => style("DEBUG").blue(),
                Level::Trace => style("TRACE").dim(),
            };
            writeln!(buf, "{} {} {}", timestamp, level, record.args())
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), LevelFilter::Info);
        assert_eq!(default_level(true), LevelFilter::Debug);
    }
}
