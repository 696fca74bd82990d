// ============================================================================
// mediaspec-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for ModelConfig
//
// This module implements the builder pattern for the ModelConfig structure,
// providing a fluent API for creating validation policies.
//
// KEY COMPONENTS:
// - ModelConfigBuilder: Builder struct for creating ModelConfig instances
// - Parsing of textual validation modes (CLI flags, config strings)

// ---- Internal crate imports ----
use super::ModelConfig;
use crate::error::CoreResult;
use crate::validation::ValidationMode;

/// Builder for creating ModelConfig instances.
///
/// The builder starts from the fixed defaults rather than the environment,
/// so the result does not depend on the process it runs in.
///
/// # Examples
///
/// ```rust
/// use mediaspec_core::config::ModelConfigBuilder;
///
/// let config = ModelConfigBuilder::new()
///     .validation_mode_str("strict")
///     .unwrap()
///     .build();
/// assert!(config.validation_mode.is_strict());
/// assert!(!config.allow_unknown_tokens);
/// ```
#[derive(Debug, Clone)]
pub struct ModelConfigBuilder {
    validation_mode: ValidationMode,
    allow_unknown_tokens: bool,
}

impl Default for ModelConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelConfigBuilder {
    /// Creates a new ModelConfigBuilder with default values.
    pub fn new() -> Self {
        let defaults = ModelConfig::defaults();
        Self {
            validation_mode: defaults.validation_mode,
            allow_unknown_tokens: defaults.allow_unknown_tokens,
        }
    }

    /// Starts from an existing configuration, e.g. one read from the environment.
    pub fn from_config(config: ModelConfig) -> Self {
        Self {
            validation_mode: config.validation_mode,
            allow_unknown_tokens: config.allow_unknown_tokens,
        }
    }

    /// Sets the validation mode.
    ///
    /// # Arguments
    ///
    /// * `mode` - Lenient reports violations, strict turns them into errors
    ///
    /// # Returns
    ///
    /// * Self for method chaining
    pub fn validation_mode(mut self, mode: ValidationMode) -> Self {
        self.validation_mode = mode;
        self
    }

    /// Sets the validation mode from its textual name (`lenient` / `strict`).
    ///
    /// # Errors
    ///
    /// * `CoreError::Config` if the name is not a known mode
    pub fn validation_mode_str(mut self, mode: &str) -> CoreResult<Self> {
        self.validation_mode = mode.parse()?;
        Ok(self)
    }

    /// Sets whether unknown tokens are tolerated.
    ///
    /// # Arguments
    ///
    /// * `allow` - When true, tokens outside a known vocabulary are not reported
    ///
    /// # Returns
    ///
    /// * Self for method chaining
    pub fn allow_unknown_tokens(mut self, allow: bool) -> Self {
        self.allow_unknown_tokens = allow;
        self
    }

    /// Builds a ModelConfig instance from the builder.
    pub fn build(self) -> ModelConfig {
        ModelConfig {
            validation_mode: self.validation_mode,
            allow_unknown_tokens: self.allow_unknown_tokens,
        }
    }
}
