//! Configuration structures and constants for the mediaspec-core library.
//!
//! Records themselves are never configured: every write is accepted as-is.
//! This module controls what happens when a caller explicitly asks a record
//! to validate itself.

mod builder;
pub mod utils;

pub use builder::ModelConfigBuilder;

use crate::validation::ValidationMode;
use utils::{get_env_bool, get_env_parsed};

// Environment variable names

/// Selects the validation mode (`lenient` or `strict`).
pub const ENV_VALIDATION_MODE: &str = "MEDIASPEC_VALIDATION_MODE";

/// When true, tokens outside a field's known vocabulary are not reported.
pub const ENV_ALLOW_UNKNOWN_TOKENS: &str = "MEDIASPEC_ALLOW_UNKNOWN_TOKENS";

// Default constants

/// Default validation mode. Lenient keeps the service-side contract: values
/// are only reported, never rejected.
pub const DEFAULT_VALIDATION_MODE: ValidationMode = ValidationMode::Lenient;

/// Unknown tokens are reported by default.
pub const DEFAULT_ALLOW_UNKNOWN_TOKENS: bool = false;

/// Validation policy applied by [`crate::SettingsRecord::validate_with`].
///
/// # Examples
///
/// ```rust
/// use mediaspec_core::config::ModelConfigBuilder;
/// use mediaspec_core::validation::ValidationMode;
///
/// let config = ModelConfigBuilder::new()
///     .validation_mode(ValidationMode::Strict)
///     .allow_unknown_tokens(true)
///     .build();
/// assert!(config.validation_mode.is_strict());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelConfig {
    /// Whether violations are reported (lenient) or turned into an error (strict)
    pub validation_mode: ValidationMode,

    /// Skip violations for tokens the library does not know yet
    pub allow_unknown_tokens: bool,
}

impl ModelConfig {
    /// Builds the configuration from the fixed defaults, ignoring the environment.
    pub const fn defaults() -> Self {
        Self {
            validation_mode: DEFAULT_VALIDATION_MODE,
            allow_unknown_tokens: DEFAULT_ALLOW_UNKNOWN_TOKENS,
        }
    }

    /// Builds the configuration from `MEDIASPEC_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            validation_mode: get_env_parsed(ENV_VALIDATION_MODE, DEFAULT_VALIDATION_MODE),
            allow_unknown_tokens: get_env_bool(ENV_ALLOW_UNKNOWN_TOKENS, DEFAULT_ALLOW_UNKNOWN_TOKENS),
        }
    }

    /// Shorthand for a strict configuration that still reports unknown tokens.
    pub const fn strict() -> Self {
        Self {
            validation_mode: ValidationMode::Strict,
            allow_unknown_tokens: DEFAULT_ALLOW_UNKNOWN_TOKENS,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
