//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `COMPANION_CORE_` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use companion_core::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod engine;
mod error;
mod features;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Credit ledger and gate tunables
    #[serde(default)]
    pub engine: EngineConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (for development), then reads
    /// environment variables with the `COMPANION_CORE` prefix, using
    /// `__` to separate nested values:
    ///
    /// - `COMPANION_CORE__ENGINE__STORE_TIMEOUT_MS=500` -> `engine.store_timeout_ms = 500`
    /// - `COMPANION_CORE__FEATURES__ENABLE_WARNINGS=false` -> `features.enable_warnings = false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COMPANION_CORE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::credits::SubscriptionTier;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("COMPANION_CORE__ENGINE__DEFAULT_TIER");
        env::remove_var("COMPANION_CORE__ENGINE__STORE_TIMEOUT_MS");
        env::remove_var("COMPANION_CORE__ENGINE__FAIL_CLOSED");
        env::remove_var("COMPANION_CORE__FEATURES__ENABLE_WARNINGS");
    }

    #[test]
    fn loads_defaults_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().unwrap();
        assert_eq!(config.engine.default_tier, SubscriptionTier::Free);
        assert_eq!(config.engine.store_timeout_ms, 250);
        assert!(!config.engine.fail_closed);
        assert!(config.features.enable_warnings);
        config.validate().unwrap();
    }

    #[test]
    fn reads_nested_values_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("COMPANION_CORE__ENGINE__STORE_TIMEOUT_MS", "500");
        env::set_var("COMPANION_CORE__ENGINE__FAIL_CLOSED", "true");
        env::set_var("COMPANION_CORE__FEATURES__ENABLE_WARNINGS", "false");

        let config = AppConfig::load().unwrap();
        assert_eq!(config.engine.store_timeout_ms, 500);
        assert!(config.engine.fail_closed);
        assert!(!config.features.enable_warnings);

        clear_env();
    }
}
