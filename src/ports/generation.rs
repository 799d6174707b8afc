//! Generation port - the reply-producing collaborator.
//!
//! Invoked only after the credit gate returns a verdict with
//! `can_proceed = true`. This core never produces content itself.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ExchangeId;
use crate::domain::routing::{AutonomyMode, ConversationContext, DomainMatch};

/// Everything the generation collaborator needs for one exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub exchange_id: ExchangeId,
    /// The user's message text.
    pub text: String,
    /// Matched domains, in registry order.
    pub matches: Vec<DomainMatch>,
    /// Ambient signals for this request.
    pub context: ConversationContext,
    /// Effective autonomy mode for the exchange.
    pub mode: AutonomyMode,
}

/// A generated reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedReply {
    pub exchange_id: ExchangeId,
    pub text: String,
}

/// Port for the language-generation collaborator.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<GeneratedReply, GenerationError>;
}

/// Failures signalled by the generation collaborator.
///
/// The core maps these to user-facing notices and does not retry.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerationError {
    #[error("generation rate limited")]
    RateLimited,

    #[error("generation payment required")]
    PaymentRequired,

    #[error("generation failed: {0}")]
    Failed(String),
}
