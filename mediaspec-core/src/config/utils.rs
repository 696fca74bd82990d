//! Configuration utility functions
//!
//! This module provides helper functions for working with
//! environment variables and configuration values.

use log::warn;
use std::str::FromStr;

/// Get a boolean value from an environment variable or use the default
pub fn get_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => parse_bool(&val).unwrap_or(default),
        Err(_) => default,
    }
}

/// Get a value parsed with `FromStr` from an environment variable or use the default.
///
/// Unparseable values fall back to the default with a warning.
pub fn get_env_parsed<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Ignoring {}={:?}: {}", key, val, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Parse the boolean spellings accepted in environment variables.
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" on "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn missing_variables_use_defaults() {
        let key = "MEDIASPEC_TEST_SURELY_UNSET_VARIABLE";
        assert!(get_env_bool(key, true));
        assert_eq!(get_env_parsed::<u32>(key, 7), 7);
    }
}
