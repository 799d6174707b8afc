//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Surface usage warnings through the notification port
    #[serde(default = "default_enable_warnings")]
    pub enable_warnings: bool,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_warnings: true,
            verbose_errors: false,
        }
    }
}

fn default_enable_warnings() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_enabled_by_default() {
        let flags = FeatureFlags::default();
        assert!(flags.enable_warnings);
        assert!(!flags.verbose_errors);
    }

    #[test]
    fn flags_deserialize_from_json() {
        let json = r#"{"enable_warnings": false, "verbose_errors": true}"#;
        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(!flags.enable_warnings);
        assert!(flags.verbose_errors);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert!(flags.enable_warnings);
    }
}
