use std::fmt::{self, Display};

use log::warn;

use crate::config::ModelConfig;
use crate::error::{CoreError, CoreResult};

/// What is wrong with a single field value
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationKind {
    /// Numeric value outside its documented inclusive range
    OutOfRange { value: String, min: i64, max: i64 },

    /// Decimal value that is not one of the documented values
    NotOneOf { value: String, allowed: &'static [f64] },

    /// String that does not match the documented pattern
    PatternMismatch { value: String, pattern: &'static str },

    /// Token outside the field's known vocabulary
    UnknownToken { token: String, allowed: &'static [&'static str] },
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Dotted path of the offending field, e.g. `QvbrSettings.QvbrQualityLevel`
    pub path: String,

    /// What is wrong with it
    pub kind: ViolationKind,
}

impl Violation {
    pub fn is_unknown_token(&self) -> bool {
        matches!(self.kind, ViolationKind::UnknownToken { .. })
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::OutOfRange { value, min, max } => {
                write!(f, "{}: {} is outside {}..={}", self.path, value, min, max)
            }
            ViolationKind::NotOneOf { value, allowed } => {
                let values: Vec<String> = allowed.iter().map(|v| format!("{:?}", v)).collect();
                write!(f, "{}: {} is not one of {}", self.path, value, values.join(", "))
            }
            ViolationKind::PatternMismatch { value, pattern } => {
                write!(f, "{}: '{}' does not match {}", self.path, value, pattern)
            }
            ViolationKind::UnknownToken { token, allowed } => {
                write!(f, "{}: unknown token '{}' (expected one of {})", self.path, token, allowed.join(", "))
            }
        }
    }
}

/// Validation report for one record, including its nested records
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    record: &'static str,
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Create an empty report for the named record type
    pub fn new(record: &'static str) -> Self {
        Self {
            record,
            violations: Vec::new(),
        }
    }

    /// Name of the record type that was checked
    pub fn record(&self) -> &'static str {
        self.record
    }

    /// Add a violation for the field at `path`
    pub fn push(&mut self, path: &str, kind: ViolationKind) {
        self.violations.push(Violation {
            path: path.to_string(),
            kind,
        });
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns true if no violations were found
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Applies a validation policy to the collected violations.
    ///
    /// Unknown tokens are dropped first when the configuration tolerates
    /// them. In lenient mode every remaining violation is logged as a warning
    /// and the report is returned; in strict mode any remaining violation is
    /// an error.
    pub fn enforce(mut self, config: &ModelConfig) -> CoreResult<Self> {
        if config.allow_unknown_tokens {
            self.violations.retain(|v| !v.is_unknown_token());
        }

        if self.violations.is_empty() {
            return Ok(self);
        }

        if config.validation_mode.is_strict() {
            let summary = self
                .violations
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(CoreError::Validation {
                record: self.record,
                count: self.violations.len(),
                summary,
            });
        }

        for violation in &self.violations {
            warn!("{} {}", self.record, violation);
        }
        Ok(self)
    }

    /// Generate a formatted validation report
    pub fn format(&self) -> String {
        let mut lines = Vec::new();
        if self.is_valid() {
            lines.push(format!("{}: no violations", self.record));
        } else {
            lines.push(format!("{}: {} violation(s)", self.record, self.violations.len()));
            for violation in &self.violations {
                lines.push(format!("  - {}", violation));
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationMode;

    fn report_with_unknown_token() -> ValidationReport {
        let mut report = ValidationReport::new("H264Settings");
        report.push(
            "RateControlMode",
            ViolationKind::UnknownToken {
                token: "ABR".to_string(),
                allowed: &["VBR", "CBR", "QVBR"],
            },
        );
        report
    }

    #[test]
    fn lenient_mode_returns_violations() {
        let report = report_with_unknown_token()
            .enforce(&ModelConfig::defaults())
            .unwrap();
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn strict_mode_fails() {
        let err = report_with_unknown_token()
            .enforce(&ModelConfig::strict())
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("H264Settings"));
        assert!(message.contains("unknown token 'ABR'"));
    }

    #[test]
    fn unknown_tokens_can_be_tolerated() {
        let config = ModelConfig {
            validation_mode: ValidationMode::Strict,
            allow_unknown_tokens: true,
        };
        let report = report_with_unknown_token().enforce(&config).unwrap();
        assert!(report.is_valid());
    }

    #[test]
    fn format_lists_each_violation() {
        let mut report = ValidationReport::new("H264Settings");
        report.push("Bitrate", ViolationKind::OutOfRange { value: "5".to_string(), min: 1000, max: 1152000000 });
        let text = report.format();
        assert!(text.starts_with("H264Settings: 1 violation(s)"));
        assert!(text.contains("Bitrate: 5 is outside 1000..=1152000000"));
    }
}
