//! SendMessageHandler - The full admission-and-dispatch pipeline.
//!
//! route -> gate -> autonomy -> generate -> warn. Generation happens only
//! after the gate admits the action; upstream failures map to notices
//! and are never retried here.

use std::sync::Arc;

use crate::application::handlers::{
    CheckWarningHandler, EvaluateCreditsHandler, RouteMessageHandler, TryConsumeHandler,
};
use crate::domain::credits::{ActionKind, CreditVerdict, WarningKind};
use crate::domain::foundation::{DomainError, ErrorCode, ExchangeId, UserId};
use crate::domain::routing::{AutonomyMode, ConversationContext, DomainMatch, DomainRegistry};
use crate::ports::{
    GeneratedReply, GenerationError, GenerationRequest, NoticeKind, Notifier, ReplyGenerator,
};

/// Command to process one user message end to end.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub user_id: UserId,
    pub text: String,
    pub context: ConversationContext,
    /// Dominant action kind for this message, as classified by the caller.
    pub action: ActionKind,
    /// The user's global autonomy setting.
    pub global_mode: AutonomyMode,
}

impl SendMessageCommand {
    /// An ordinary text reply with default context and adaptive autonomy.
    pub fn reply(user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            user_id,
            text: text.into(),
            context: ConversationContext::default(),
            action: ActionKind::Reply,
            global_mode: AutonomyMode::Adaptive,
        }
    }
}

/// Result of a processed message.
#[derive(Debug, Clone)]
pub struct SendMessageResult {
    pub exchange_id: ExchangeId,
    pub reply: GeneratedReply,
    /// Domains the message activated, in registry order.
    pub matches: Vec<DomainMatch>,
    /// Effective autonomy mode for the exchange.
    pub mode: AutonomyMode,
    /// Verdict after this message's consumption.
    pub verdict: CreditVerdict,
    /// Warning surfaced for this exchange, if any.
    pub warning: Option<WarningKind>,
}

/// Handler for the `send_message` operation.
pub struct SendMessageHandler {
    route: Arc<RouteMessageHandler>,
    consume: Arc<TryConsumeHandler>,
    evaluate: Arc<EvaluateCreditsHandler>,
    warnings: Arc<CheckWarningHandler>,
    registry: Arc<DomainRegistry>,
    generator: Arc<dyn ReplyGenerator>,
    notifier: Arc<dyn Notifier>,
}

impl SendMessageHandler {
    pub fn new(
        route: Arc<RouteMessageHandler>,
        consume: Arc<TryConsumeHandler>,
        evaluate: Arc<EvaluateCreditsHandler>,
        warnings: Arc<CheckWarningHandler>,
        registry: Arc<DomainRegistry>,
        generator: Arc<dyn ReplyGenerator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            route,
            consume,
            evaluate,
            warnings,
            registry,
            generator,
            notifier,
        }
    }

    pub async fn handle(&self, cmd: SendMessageCommand) -> Result<SendMessageResult, DomainError> {
        let exchange_id = ExchangeId::new();
        let routed = self.route.handle(&cmd.text, cmd.context);

        if !self.consume.handle(&cmd.user_id, cmd.action).await {
            // Let the limit notice surface (once) before reporting the denial.
            self.warnings.handle(&cmd.user_id).await;
            return Err(DomainError::quota_exceeded(cmd.action.as_str()));
        }

        let lead_domain = routed
            .matches
            .first()
            .map(|m| m.domain_id)
            .ok_or_else(|| DomainError::new(ErrorCode::UnknownDomain, "no domain matched"))?;
        let mode = AutonomyMode::resolve(cmd.global_mode, self.registry.default_autonomy(lead_domain));

        let request = GenerationRequest {
            exchange_id,
            text: cmd.text.clone(),
            matches: routed.matches.clone(),
            context: routed.context,
            mode,
        };
        let reply = match self.generator.generate(request).await {
            Ok(reply) => reply,
            Err(err) => return Err(self.map_generation_error(err).await),
        };

        let warning = self.warnings.handle(&cmd.user_id).await;
        let verdict = self.evaluate.handle(&cmd.user_id).await;

        Ok(SendMessageResult {
            exchange_id,
            reply,
            matches: routed.matches,
            mode,
            verdict,
            warning,
        })
    }

    async fn map_generation_error(&self, err: GenerationError) -> DomainError {
        match err {
            GenerationError::RateLimited => {
                self.notifier
                    .notify(NoticeKind::ServiceBusy, "I'm a bit busy right now, try again shortly.")
                    .await;
                DomainError::new(ErrorCode::UpstreamRateLimited, "generation rate limited")
            }
            GenerationError::PaymentRequired => {
                self.notifier
                    .notify(NoticeKind::PaymentRequired, "There's a billing issue with your plan.")
                    .await;
                DomainError::new(ErrorCode::UpstreamPaymentRequired, "generation payment required")
            }
            GenerationError::Failed(reason) => {
                DomainError::new(ErrorCode::GenerationFailed, reason)
            }
        }
    }
}
