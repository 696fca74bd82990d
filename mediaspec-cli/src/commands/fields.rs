// mediaspec-cli/src/commands/fields.rs
//
// Implementation of the `fields` command.

use crate::cli::FieldsArgs;
use crate::output::{print_heading, print_info};
use console::style;
use mediaspec_core::FieldInfo;

/// Renders the constraint column for one field.
fn constraint_column(field: &FieldInfo) -> String {
    match field.tokens {
        Some(tokens) if field.constraint.is_none() => tokens.join(", "),
        Some(tokens) => format!("{} ({})", field.constraint, tokens.join(", ")),
        None if field.constraint.is_none() => String::new(),
        None => field.constraint.to_string(),
    }
}

/// Prints the field table of a record kind.
pub fn run_fields(args: &FieldsArgs) {
    print_heading(args.kind.record_name());
    print_info("Kind", args.kind.name());
    print_info("Fields", args.kind.fields().len());
    println!();

    for field in args.kind.fields() {
        println!(
            "{:<36} {:<36} {:<28} {}",
            style(field.name).bold(),
            field.wire_name(),
            style(field.kind).dim(),
            constraint_column(field)
        );
    }
}
