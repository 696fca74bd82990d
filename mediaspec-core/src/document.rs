//! JSON settings documents.
//!
//! A document is the JSON wire shape of one record: camelCase keys, absent
//! fields omitted. Unknown keys are ignored when reading.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::CoreResult;
use crate::model::{AnyRecord, RecordKind};
use crate::record::SettingsRecord;

/// Parses a record from a JSON document.
pub fn from_json_str<R: SettingsRecord>(json: &str) -> CoreResult<R> {
    Ok(serde_json::from_str(json)?)
}

/// Serializes a record as a pretty-printed JSON document.
pub fn to_json_string<R: SettingsRecord>(record: &R) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Reads a record from a JSON file.
pub fn load_record<R: SettingsRecord>(path: &Path) -> CoreResult<R> {
    debug!("Loading {} from {}", R::NAME, path.display());
    let contents = fs::read_to_string(path)?;
    from_json_str(&contents)
}

/// Writes a record to a JSON file, creating parent directories as needed.
pub fn save_record<R: SettingsRecord>(record: &R, path: &Path) -> CoreResult<()> {
    debug!("Saving {} to {}", R::NAME, path.display());
    write_document(path, &to_json_string(record)?)
}

/// Reads a record of a kind chosen at runtime.
pub fn load_any(kind: RecordKind, path: &Path) -> CoreResult<AnyRecord> {
    debug!("Loading {} from {}", kind, path.display());
    let contents = fs::read_to_string(path)?;
    AnyRecord::from_json(kind, &contents)
}

/// Writes a record of a kind chosen at runtime.
pub fn save_any(record: &AnyRecord, path: &Path) -> CoreResult<()> {
    debug!("Saving {} to {}", record.kind(), path.display());
    write_document(path, &record.to_json_pretty()?)
}

fn write_document(path: &Path, contents: &str) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, format!("{}\n", contents))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{H264RateControlMode, H264Settings};

    #[test]
    fn documents_use_camel_case_keys_and_skip_absent_fields() {
        let settings = H264Settings::new()
            .with_rate_control_mode(H264RateControlMode::Qvbr)
            .with_max_bitrate(8_000_000);
        let json = to_json_string(&settings).unwrap();
        assert!(json.contains("\"rateControlMode\": \"QVBR\""));
        assert!(json.contains("\"maxBitrate\": 8000000"));
        assert!(!json.contains("bitrate\": null"));
    }

    #[test]
    fn unknown_keys_are_ignored_and_unknown_tokens_kept() {
        let json = r#"{"rateControlMode": "ABR", "futureSetting": true}"#;
        let settings: H264Settings = from_json_str(json).unwrap();
        assert_eq!(settings.rate_control_mode().map(|m| m.as_str()), Some("ABR"));
        assert_eq!(to_json_string(&settings).unwrap(), "{\n  \"rateControlMode\": \"ABR\"\n}");
    }
}
