// ============================================================================
// mediaspec-cli/src/commands/set.rs
// ============================================================================
//
// SET COMMAND: Edit a Settings Document From the Command Line
//
// Loads a document (or starts from an empty record), applies `--clear`
// fields and FIELD=VALUE assignments in order, then writes the result to
// `--output` or prints it on stdout. Writes are never validated.
//
// VALUE PARSING:
// A value is read as JSON when it parses (5000000, 0.5, [482,483], null,
// {"qvbrQualityLevel":7}) and as a plain string otherwise. A value that
// parses as JSON but does not fit the field is retried as a string, so
// `StreamName=123` stores the text "123".

use crate::cli::SetArgs;
use crate::error::{CliError, CliResult};
use anyhow::Context;
use log::{debug, info};
use mediaspec_core::document::{load_any, save_any};
use mediaspec_core::{AnyRecord, CoreError};
use serde_json::Value;

/// Splits a FIELD=VALUE argument.
pub fn parse_assignment(arg: &str) -> Result<(&str, &str), CliError> {
    match arg.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => Ok((field.trim(), value)),
        _ => Err(CliError::InvalidAssignment(arg.to_string())),
    }
}

/// Interprets a command-line value as JSON, falling back to a string.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Writes one assignment into the record.
fn apply_assignment(record: &mut AnyRecord, field: &str, raw: &str) -> CliResult<()> {
    let value = parse_value(raw);
    let retry_as_text = !value.is_string() && !value.is_null();

    match record.set_field(field, value) {
        Err(CoreError::InvalidFieldValue { .. }) if retry_as_text => {
            debug!("Retrying {} as a string value", field);
            record.set_field(field, Value::String(raw.to_string()))?;
        }
        result => result?,
    }
    Ok(())
}

/// Runs the `set` command.
pub fn run_set(args: &SetArgs) -> CliResult<()> {
    let mut record = if args.file.exists() {
        load_any(args.kind, &args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?
    } else {
        info!(
            "{} does not exist, starting from an empty {}",
            args.file.display(),
            args.kind.record_name()
        );
        AnyRecord::empty(args.kind)
    };

    for field in &args.clear {
        record.clear_field(field)?;
    }

    for arg in &args.assignments {
        let (field, raw) = parse_assignment(arg)?;
        apply_assignment(&mut record, field, raw)
            .with_context(|| format!("Failed to apply '{}'", arg))?;
    }

    match &args.output {
        Some(path) => {
            save_any(&record, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} to {}", args.kind.record_name(), path.display());
        }
        None => println!("{}", record.to_json_pretty()?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediaspec_core::RecordKind;
    use serde_json::json;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("Bitrate=5000000"), Ok(("Bitrate", "5000000")));
        assert_eq!(parse_assignment("StreamName=a=b"), Ok(("StreamName", "a=b")));
        assert_eq!(parse_assignment("StreamName="), Ok(("StreamName", "")));
        assert!(parse_assignment("Bitrate").is_err());
        assert!(parse_assignment("=5").is_err());
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("5000000"), json!(5000000));
        assert_eq!(parse_value("[482,483]"), json!([482, 483]));
        assert_eq!(parse_value("null"), Value::Null);
        assert_eq!(parse_value("QVBR"), json!("QVBR"));
        assert_eq!(parse_value("\"123\""), json!("123"));
    }

    #[test]
    fn test_numeric_text_falls_back_to_string() {
        let mut record = AnyRecord::empty(RecordKind::AudioDescription);
        apply_assignment(&mut record, "StreamName", "123").unwrap();
        assert_eq!(record.get_field("StreamName").unwrap(), Some(json!("123")));
    }

    #[test]
    fn test_wrong_shape_is_reported() {
        let mut record = AnyRecord::empty(RecordKind::H264Settings);
        assert!(apply_assignment(&mut record, "Bitrate", "fast").is_err());
        assert!(record.is_empty());
    }
}
