//! Settings record machinery
//!
//! A settings record is a fixed set of named optional fields. Reading a field
//! never fails and writing one never checks it. Records compare and hash
//! field by field, and dump themselves as `{Label: value,...}`.
//!
//! Concrete records are declared with the `settings_record!` macro and
//! implement [`SettingsRecord`]. This module holds the traits and helpers that
//! generated code relies on.

mod describe;
mod field;

pub use describe::Describer;
pub use field::{RecordField, UnknownToken, option_eq, option_hash};

use std::fmt;
use std::hash::Hash;

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ModelConfig;
use crate::error::{CoreError, CoreResult};
use crate::validation::{Constraint, ValidationReport};

/// Metadata for one record field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldInfo {
    /// Display name, as it appears in the record dump
    pub name: &'static str,

    /// Value kind: `integer`, `long`, `double`, `string`, `list`, or the
    /// name of the token enum or nested record
    pub kind: &'static str,

    /// Known tokens for closed-vocabulary fields
    pub tokens: Option<&'static [&'static str]>,

    /// Documented constraint, checked only on validation
    pub constraint: Constraint,
}

impl FieldInfo {
    /// Key used for this field in JSON documents.
    pub fn wire_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Returns true if `name` refers to this field.
    ///
    /// Case, underscores and dashes are ignored, so `RateControlMode`,
    /// `rateControlMode` and `rate_control_mode` all match.
    pub fn matches(&self, name: &str) -> bool {
        normalize_field_name(name) == normalize_field_name(self.name)
    }
}

fn normalize_field_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Behaviour shared by every settings record.
pub trait SettingsRecord:
    Default
    + Clone
    + Eq
    + Hash
    + fmt::Debug
    + fmt::Display
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Record type name, e.g. `H264Settings`
    const NAME: &'static str;

    /// Field metadata in declaration order.
    fn fields() -> &'static [FieldInfo];

    /// Appends violations of this record and its nested records to `report`,
    /// with field paths rooted at `path`.
    fn collect_violations(&self, path: &str, report: &mut ValidationReport);

    /// Reads the field labelled `label` as JSON. Unknown labels read as `None`.
    fn field_to_json(&self, label: &str) -> serde_json::Result<Option<Value>>;

    /// Writes the field labelled `label` from JSON, touching no other field.
    /// `null` clears it; on error the field keeps its previous value.
    fn field_from_json(&mut self, label: &str, value: Value) -> serde_json::Result<()>;

    /// Human-readable dump: present fields only, in declaration order.
    fn describe(&self) -> String {
        self.to_string()
    }

    /// Returns true if no field is present.
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn field_info(name: &str) -> Option<&'static FieldInfo> {
        Self::fields().iter().find(|info| info.matches(name))
    }

    /// Checks every present field against its documented constraint.
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new(Self::NAME);
        self.collect_violations("", &mut report);
        report
    }

    /// Validates and applies the policy in `config`.
    ///
    /// # Errors
    ///
    /// * `CoreError::Validation` in strict mode when any violation remains
    fn validate_with(&self, config: &ModelConfig) -> CoreResult<ValidationReport> {
        self.validate().enforce(config)
    }

    /// Reads a field by name as JSON. Absent fields read as `None`; NaN and
    /// infinite decimals read as the strings `NaN`, `Infinity`, `-Infinity`.
    ///
    /// # Errors
    ///
    /// * `CoreError::UnknownField` if the record has no such field
    fn get_field(&self, name: &str) -> CoreResult<Option<Value>> {
        let info = lookup_field::<Self>(name)?;
        Ok(self.field_to_json(info.name)?)
    }

    /// Writes a field by name from JSON. `null` clears the field.
    ///
    /// Like the typed setters this does not check the field's constraint; the
    /// value only has to have the right shape. Other fields are left as they
    /// are.
    ///
    /// # Errors
    ///
    /// * `CoreError::UnknownField` if the record has no such field
    /// * `CoreError::InvalidFieldValue` if the value has the wrong shape
    fn set_field(&mut self, name: &str, value: Value) -> CoreResult<()> {
        let info = lookup_field::<Self>(name)?;
        debug!("Setting {}.{} = {}", Self::NAME, info.name, value);

        self.field_from_json(info.name, value)
            .map_err(|e| CoreError::InvalidFieldValue {
                record: Self::NAME,
                field: info.name,
                message: e.to_string(),
            })
    }

    /// Removes a field by name.
    ///
    /// # Errors
    ///
    /// * `CoreError::UnknownField` if the record has no such field
    fn clear_field(&mut self, name: &str) -> CoreResult<()> {
        self.set_field(name, Value::Null)
    }
}

/// A whole record as a JSON object keyed by wire name, absent fields omitted.
pub fn record_to_json<R: SettingsRecord>(record: &R) -> serde_json::Result<Value> {
    let mut map = serde_json::Map::new();
    for info in R::fields() {
        if let Some(value) = record.field_to_json(info.name)? {
            map.insert(info.wire_name(), value);
        }
    }
    Ok(Value::Object(map))
}

/// Builds a record from a JSON object keyed by wire name. Keys that name no
/// field are ignored, as in documents.
pub fn record_from_json<R: SettingsRecord>(value: Value) -> serde_json::Result<R> {
    let Value::Object(map) = value else {
        return serde_json::from_value(value);
    };

    let mut record = R::default();
    for (key, value) in map {
        if let Some(info) = R::fields().iter().find(|info| info.wire_name() == key) {
            record.field_from_json(info.name, value)?;
        }
    }
    Ok(record)
}

fn lookup_field<R: SettingsRecord>(name: &str) -> CoreResult<&'static FieldInfo> {
    R::field_info(name).ok_or_else(|| CoreError::UnknownField {
        record: R::NAME,
        field: name.to_string(),
    })
}
