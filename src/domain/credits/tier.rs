//! Subscription tier definitions.
//!
//! Represents the subscription levels available in the companion app.

use serde::{Deserialize, Serialize};

/// Subscription tier.
///
/// Determines daily quotas and which action kinds are permitted at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    /// Free tier - text replies only, modest daily quota.
    Free,

    /// Plus tier - larger quotas, voice and extended reasoning enabled.
    Plus,

    /// Unlimited tier - no quota on any action kind.
    Unlimited,
}

impl SubscriptionTier {
    /// The tier new accounts are seeded with.
    pub const ENTRY: SubscriptionTier = SubscriptionTier::Free;

    /// Returns true if this tier is a paid tier.
    pub fn is_paid(&self) -> bool {
        !matches!(self, SubscriptionTier::Free)
    }

    /// Returns true if this tier has no quota on any action.
    pub fn is_unlimited(&self) -> bool {
        matches!(self, SubscriptionTier::Unlimited)
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionTier::Free => "Free",
            SubscriptionTier::Plus => "Plus",
            SubscriptionTier::Unlimited => "Unlimited",
        }
    }

    /// Returns the numeric rank of this tier for comparison.
    ///
    /// Higher rank = more quota. Used for upgrade validation.
    pub fn rank(&self) -> u8 {
        match self {
            SubscriptionTier::Free => 0,
            SubscriptionTier::Plus => 1,
            SubscriptionTier::Unlimited => 2,
        }
    }
}

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
