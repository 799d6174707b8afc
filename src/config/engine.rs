//! Metering engine configuration

use serde::Deserialize;

use crate::config::error::ValidationError;
use crate::domain::credits::SubscriptionTier;

const MAX_STORE_TIMEOUT_MS: u64 = 30_000;

/// Tunables for the credit ledger and gate
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Tier assigned to accounts the store has no record of
    #[serde(default = "default_tier")]
    pub default_tier: SubscriptionTier,

    /// Upper bound on any single credit store call, in milliseconds
    #[serde(default = "default_store_timeout_ms")]
    pub store_timeout_ms: u64,

    /// Deny actions instead of admitting them when the store is
    /// unreachable. Off by default: a metering outage should not take
    /// the product down with it.
    #[serde(default)]
    pub fail_closed: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_tier: default_tier(),
            store_timeout_ms: default_store_timeout_ms(),
            fail_closed: false,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.store_timeout_ms == 0 {
            return Err(ValidationError::InvalidStoreTimeout);
        }
        if self.store_timeout_ms > MAX_STORE_TIMEOUT_MS {
            return Err(ValidationError::StoreTimeoutTooLarge);
        }
        Ok(())
    }
}

fn default_tier() -> SubscriptionTier {
    SubscriptionTier::Free
}

fn default_store_timeout_ms() -> u64 {
    250
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_free_tier_and_fail_open() {
        let config = EngineConfig::default();
        assert_eq!(config.default_tier, SubscriptionTier::Free);
        assert_eq!(config.store_timeout_ms, 250);
        assert!(!config.fail_closed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let config = EngineConfig {
            store_timeout_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidStoreTimeout)
        ));
    }

    #[test]
    fn oversized_timeout_fails_validation() {
        let config = EngineConfig {
            store_timeout_ms: 60_000,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::StoreTimeoutTooLarge)
        ));
    }
}
