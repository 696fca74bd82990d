//! Settings validation module
//!
//! Responsibilities:
//! - Describe the documented constraint of each record field
//! - Check present values against those constraints on request
//! - Collect violations into a report with dotted field paths
//! - Apply the lenient/strict policy from [`crate::config::ModelConfig`]
//!
//! Record writes never call into this module. Validation only happens when a
//! caller asks for it, so a record built with out-of-range values or tokens
//! the library does not know yet is still a perfectly usable record.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

pub mod constraint;
pub mod report;

pub use constraint::Constraint;
pub use report::{ValidationReport, Violation, ViolationKind};

/// How violations are treated once a record has been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationMode {
    /// Violations are logged and returned in the report
    #[default]
    Lenient,

    /// Any violation turns into `CoreError::Validation`
    Strict,
}

impl ValidationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationMode::Lenient => "lenient",
            ValidationMode::Strict => "strict",
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, ValidationMode::Strict)
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(ValidationMode::Lenient),
            "strict" => Ok(ValidationMode::Strict),
            other => Err(CoreError::Config(format!(
                "unknown validation mode '{}' (expected 'lenient' or 'strict')",
                other
            ))),
        }
    }
}

/// Joins a parent path and a field name with a dot.
pub fn join_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", parent, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parsing_is_case_insensitive() {
        assert_eq!("STRICT".parse::<ValidationMode>().unwrap(), ValidationMode::Strict);
        assert_eq!(" lenient ".parse::<ValidationMode>().unwrap(), ValidationMode::Lenient);
        assert!("eager".parse::<ValidationMode>().is_err());
    }

    #[test]
    fn join_path_skips_empty_parent() {
        assert_eq!(join_path("", "Bitrate"), "Bitrate");
        assert_eq!(join_path("QvbrSettings", "QvbrQualityLevel"), "QvbrSettings.QvbrQualityLevel");
    }
}
