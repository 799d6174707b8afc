//! Tier catalog: daily quotas and per-use costs for each tier.
//!
//! Immutable, loaded once. The default catalog is the product
//! configuration; tests construct their own via [`TierCatalog::new`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{ActionKind, SubscriptionTier};

/// Daily quota for one action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quota {
    /// The tier may never perform this action.
    Forbidden,
    /// At most this many units per calendar day.
    Limited(u32),
    /// No daily cap.
    Unlimited,
}

impl Quota {
    /// Returns true if `consumed` units leave room for another use.
    pub fn permits(&self, consumed: u32) -> bool {
        match self {
            Quota::Forbidden => false,
            Quota::Limited(max) => consumed < *max,
            Quota::Unlimited => true,
        }
    }

    /// Returns true if this quota has no cap.
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Quota::Unlimited)
    }
}

/// Quotas and costs for one subscription tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDefinition {
    /// The tier these limits apply to.
    pub tier: SubscriptionTier,
    /// Daily quota for ordinary replies (the primary action).
    pub reply: Quota,
    /// Daily quota for extended-reasoning replies.
    pub deep_thought: Quota,
    /// Daily quota for voice replies.
    pub voice_reply: Quota,
    /// Daily quota for media generation.
    pub media_generation: Quota,
}

impl TierDefinition {
    /// Get the limits for a specific tier.
    ///
    /// # Tier Configuration
    ///
    /// | Tier | Reply | Deep thought | Voice | Media |
    /// |------|-------|--------------|-------|-------|
    /// | Free | 25 | - | - | - |
    /// | Plus | 100 | 20 | 50 | 10 |
    /// | Unlimited | unlimited | unlimited | unlimited | unlimited |
    pub fn for_tier(tier: SubscriptionTier) -> Self {
        match tier {
            SubscriptionTier::Free => Self {
                tier,
                reply: Quota::Limited(25),
                deep_thought: Quota::Forbidden,
                voice_reply: Quota::Forbidden,
                media_generation: Quota::Forbidden,
            },
            SubscriptionTier::Plus => Self {
                tier,
                reply: Quota::Limited(100),
                deep_thought: Quota::Limited(20),
                voice_reply: Quota::Limited(50),
                media_generation: Quota::Limited(10),
            },
            SubscriptionTier::Unlimited => Self {
                tier,
                reply: Quota::Unlimited,
                deep_thought: Quota::Unlimited,
                voice_reply: Quota::Unlimited,
                media_generation: Quota::Unlimited,
            },
        }
    }

    /// Returns the daily quota for an action kind.
    pub fn quota(&self, kind: ActionKind) -> Quota {
        match kind {
            ActionKind::Reply => self.reply,
            ActionKind::DeepThought => self.deep_thought,
            ActionKind::VoiceReply => self.voice_reply,
            ActionKind::MediaGeneration => self.media_generation,
        }
    }

    /// Returns the units one use of an action kind consumes.
    ///
    /// Costs are uniform across tiers; quotas are what differ.
    pub fn cost(&self, kind: ActionKind) -> u32 {
        match kind {
            ActionKind::Reply => 1,
            ActionKind::DeepThought => 3,
            ActionKind::VoiceReply => 2,
            ActionKind::MediaGeneration => 5,
        }
    }
}

/// The full tier table, one definition per tier.
#[derive(Debug, Clone)]
pub struct TierCatalog {
    definitions: Vec<TierDefinition>,
}

impl TierCatalog {
    /// Builds a catalog from explicit definitions.
    ///
    /// Intended for tests that need non-product quotas.
    pub fn new(definitions: Vec<TierDefinition>) -> Self {
        Self { definitions }
    }

    /// Returns the definition for a tier.
    ///
    /// Falls back to the static product definition if the catalog was
    /// constructed without one, so lookups never fail.
    pub fn definition(&self, tier: SubscriptionTier) -> TierDefinition {
        self.definitions
            .iter()
            .find(|d| d.tier == tier)
            .cloned()
            .unwrap_or_else(|| TierDefinition::for_tier(tier))
    }
}

impl Default for TierCatalog {
    fn default() -> Self {
        Self::new(vec![
            TierDefinition::for_tier(SubscriptionTier::Free),
            TierDefinition::for_tier(SubscriptionTier::Plus),
            TierDefinition::for_tier(SubscriptionTier::Unlimited),
        ])
    }
}

/// Shared product catalog.
pub static PRODUCT_CATALOG: Lazy<TierCatalog> = Lazy::new(TierCatalog::default);
