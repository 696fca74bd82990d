use mediaspec_core::config::{ENV_ALLOW_UNKNOWN_TOKENS, ENV_VALIDATION_MODE};
use mediaspec_core::{ModelConfig, ValidationMode};
use std::env;

// Environment variables are process-wide, so every scenario runs in one test
#[test]
fn test_env_var_overrides() {
    // SAFETY: no other test in this binary touches the environment
    unsafe {
        env::remove_var(ENV_VALIDATION_MODE);
        env::remove_var(ENV_ALLOW_UNKNOWN_TOKENS);
    }
    assert_eq!(ModelConfig::default(), ModelConfig::defaults());

    unsafe {
        env::set_var(ENV_VALIDATION_MODE, "strict");
        env::set_var(ENV_ALLOW_UNKNOWN_TOKENS, "yes");
    }
    let config = ModelConfig::from_env();
    assert_eq!(config.validation_mode, ValidationMode::Strict);
    assert!(config.allow_unknown_tokens);

    // Unparseable values fall back to the defaults
    unsafe {
        env::set_var(ENV_VALIDATION_MODE, "paranoid");
        env::set_var(ENV_ALLOW_UNKNOWN_TOKENS, "sometimes");
    }
    assert_eq!(ModelConfig::from_env(), ModelConfig::defaults());

    unsafe {
        env::remove_var(ENV_VALIDATION_MODE);
        env::remove_var(ENV_ALLOW_UNKNOWN_TOKENS);
    }
}
