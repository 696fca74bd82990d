// mediaspec-cli/src/commands/kinds.rs
//
// Implementation of the `kinds` command.

use console::style;
use mediaspec_core::RecordKind;

/// Lists every record kind with the record type it maps to.
pub fn run_kinds() {
    for kind in RecordKind::ALL {
        println!(
            "{:<36} {}",
            style(kind.name()).cyan(),
            kind.record_name()
        );
    }
}
