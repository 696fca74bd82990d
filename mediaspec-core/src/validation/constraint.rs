//! Documented field constraints and the checks behind them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use super::report::{ValidationReport, ViolationKind};

/// Compiled field patterns, keyed by their source text.
static PATTERN_CACHE: Lazy<Mutex<HashMap<&'static str, Regex>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// The documented constraint attached to a record field.
///
/// Token vocabularies are not listed here: membership is carried by the
/// field's enum type and checked through it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// No documented constraint
    None,

    /// Inclusive numeric range
    Range { min: i64, max: i64 },

    /// One of a fixed set of decimal values
    OneOf(&'static [f64]),

    /// Regular expression the whole value must match
    Pattern(&'static str),
}

impl Constraint {
    pub fn is_none(&self) -> bool {
        matches!(self, Constraint::None)
    }

    /// Checks an integer value.
    pub fn check_integer(&self, value: i64, path: &str, report: &mut ValidationReport) {
        match *self {
            Constraint::Range { min, max } if value < min || value > max => {
                report.push(path, ViolationKind::OutOfRange { value: value.to_string(), min, max });
            }
            Constraint::OneOf(allowed) if !allowed.iter().any(|a| *a == value as f64) => {
                report.push(path, ViolationKind::NotOneOf { value: value.to_string(), allowed });
            }
            _ => {}
        }
    }

    /// Checks a floating point value. NaN never satisfies a range or a value set.
    pub fn check_float(&self, value: f64, path: &str, report: &mut ValidationReport) {
        match *self {
            Constraint::Range { min, max } if !(value >= min as f64 && value <= max as f64) => {
                report.push(path, ViolationKind::OutOfRange { value: format!("{:?}", value), min, max });
            }
            Constraint::OneOf(allowed) if !allowed.iter().any(|a| *a == value) => {
                report.push(path, ViolationKind::NotOneOf { value: format!("{:?}", value), allowed });
            }
            _ => {}
        }
    }

    /// Checks a free-form string value.
    pub fn check_text(&self, value: &str, path: &str, report: &mut ValidationReport) {
        if let Constraint::Pattern(pattern) = *self {
            if !pattern_matches(pattern, value) {
                report.push(
                    path,
                    ViolationKind::PatternMismatch { value: value.to_string(), pattern },
                );
            }
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::None => Ok(()),
            Constraint::Range { min, max } => write!(f, "{}..={}", min, max),
            Constraint::OneOf(allowed) => {
                let values: Vec<String> = allowed.iter().map(|v| format!("{:?}", v)).collect();
                write!(f, "one of {}", values.join(", "))
            }
            Constraint::Pattern(pattern) => write!(f, "matches {}", pattern),
        }
    }
}

/// Matches `value` against `pattern`, compiling each pattern once.
fn pattern_matches(pattern: &'static str, value: &str) -> bool {
    let mut cache = PATTERN_CACHE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(regex) = cache.get(pattern) {
        return regex.is_match(value);
    }

    match Regex::new(pattern) {
        Ok(regex) => {
            let matched = regex.is_match(value);
            cache.insert(pattern, regex);
            matched
        }
        Err(e) => {
            // A broken pattern must not reject the value
            warn!("Skipping invalid field pattern {}: {}", pattern, e);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_inclusive() {
        let range = Constraint::Range { min: 1000, max: 2000 };
        let mut report = ValidationReport::new("Test");
        range.check_integer(1000, "A", &mut report);
        range.check_integer(2000, "B", &mut report);
        assert!(report.is_valid());

        range.check_integer(999, "C", &mut report);
        range.check_integer(2001, "D", &mut report);
        assert_eq!(report.len(), 2);
        assert_eq!(report.violations()[0].path, "C");
    }

    #[test]
    fn nan_fails_float_range() {
        let range = Constraint::Range { min: -59, max: 0 };
        let mut report = ValidationReport::new("Test");
        range.check_float(-23.0, "TargetLkfs", &mut report);
        assert!(report.is_valid());
        range.check_float(f64::NAN, "TargetLkfs", &mut report);
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn one_of_matches_exact_values() {
        let levels = Constraint::OneOf(&[3.0, 1.5, 0.0, -60.0]);
        let mut report = ValidationReport::new("Test");
        levels.check_float(1.5, "Level", &mut report);
        assert!(report.is_valid());
        levels.check_float(1.0, "Level", &mut report);
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn pattern_check_uses_cached_regex() {
        let pattern = Constraint::Pattern("^s3://");
        let mut report = ValidationReport::new("Test");
        pattern.check_text("s3://bucket/out/", "Destination", &mut report);
        pattern.check_text("s3://other/", "Destination", &mut report);
        assert!(report.is_valid());
        pattern.check_text("https://example.com/", "Destination", &mut report);
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn display_formats_constraints() {
        assert_eq!(Constraint::Range { min: 0, max: 30 }.to_string(), "0..=30");
        assert_eq!(Constraint::OneOf(&[-1.5, -60.0]).to_string(), "one of -1.5, -60.0");
        assert_eq!(Constraint::None.to_string(), "");
    }
}
