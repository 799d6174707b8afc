//! CompanionEngine - The composed facade over all engine operations.
//!
//! One engine is constructed per process (or per test) from explicit
//! dependencies. There is no ambient instance: everything the engine
//! touches arrives through its constructor, so tests swap in manual
//! clocks, recording notifiers, and failing stores freely.

use std::sync::Arc;

use crate::application::handlers::{
    CheckWarningHandler, EvaluateCreditsHandler, RouteMessageHandler, SendMessageCommand,
    SendMessageHandler, SendMessageResult, TryConsumeHandler,
};
use crate::application::ledger::LedgerService;
use crate::config::AppConfig;
use crate::domain::credits::{ActionKind, CreditGate, CreditVerdict, TierCatalog, WarningKind};
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::routing::{
    AutonomyMode, ConversationContext, DomainId, DomainRegistry, MessageRouter, RoutedMessage,
};
use crate::ports::{Clock, CreditStore, IdentityProvider, Notifier, ReplyGenerator};

/// External dependencies the engine is wired from.
pub struct EngineDeps {
    pub store: Arc<dyn CreditStore>,
    pub notifier: Arc<dyn Notifier>,
    pub generator: Arc<dyn ReplyGenerator>,
    pub identity: Arc<dyn IdentityProvider>,
    pub clock: Arc<dyn Clock>,
}

/// Facade over the metering and routing operations.
pub struct CompanionEngine {
    evaluate: Arc<EvaluateCreditsHandler>,
    consume: Arc<TryConsumeHandler>,
    route: Arc<RouteMessageHandler>,
    warnings: Arc<CheckWarningHandler>,
    send: SendMessageHandler,
    registry: Arc<DomainRegistry>,
    identity: Arc<dyn IdentityProvider>,
}

impl CompanionEngine {
    /// Builds an engine with the product tier catalog and domain registry.
    pub fn new(config: &AppConfig, deps: EngineDeps) -> Self {
        Self::with_components(config, deps, TierCatalog::default(), DomainRegistry::default())
    }

    /// Builds an engine with a custom catalog and registry.
    pub fn with_components(
        config: &AppConfig,
        deps: EngineDeps,
        catalog: TierCatalog,
        registry: DomainRegistry,
    ) -> Self {
        let ledger = Arc::new(LedgerService::new(
            deps.store,
            deps.clock,
            config.engine.default_tier,
            config.engine.store_timeout_ms,
        ));
        let gate = Arc::new(CreditGate::new(catalog));
        let registry = Arc::new(registry);
        let router = Arc::new(MessageRouter::new(registry.as_ref().clone()));

        let evaluate = Arc::new(EvaluateCreditsHandler::new(
            ledger.clone(),
            gate.clone(),
            config.engine.fail_closed,
        ));
        let consume = Arc::new(TryConsumeHandler::new(
            ledger.clone(),
            gate.clone(),
            config.engine.fail_closed,
        ));
        let route = Arc::new(RouteMessageHandler::new(router));
        let warnings = Arc::new(CheckWarningHandler::new(
            ledger,
            gate,
            deps.notifier.clone(),
            config.features.enable_warnings,
        ));
        let send = SendMessageHandler::new(
            route.clone(),
            consume.clone(),
            evaluate.clone(),
            warnings.clone(),
            registry.clone(),
            deps.generator,
            deps.notifier,
        );

        Self {
            evaluate,
            consume,
            route,
            warnings,
            send,
            registry,
            identity: deps.identity,
        }
    }

    /// Current admission verdict for a user, without consuming anything.
    pub async fn evaluate(&self, user_id: &UserId) -> CreditVerdict {
        self.evaluate.handle(user_id).await
    }

    /// Attempts to consume one use of an action. Returns true when admitted.
    pub async fn try_consume(&self, user_id: &UserId, kind: ActionKind) -> bool {
        self.consume.handle(user_id, kind).await
    }

    /// Classifies a message into capability domains.
    pub fn route_message(&self, text: &str, context: ConversationContext) -> RoutedMessage {
        self.route.handle(text, context)
    }

    /// Effective autonomy mode for a domain under the user's global setting.
    pub fn determine_mode(&self, domain_id: DomainId, global: AutonomyMode) -> AutonomyMode {
        AutonomyMode::resolve(global, self.registry.default_autonomy(domain_id))
    }

    /// Surfaces at most one usage warning for the user's current session day.
    pub async fn check_and_show_warning(&self, user_id: &UserId) -> Option<WarningKind> {
        self.warnings.handle(user_id).await
    }

    /// Runs the full pipeline for one message.
    pub async fn send_message(
        &self,
        cmd: SendMessageCommand,
    ) -> Result<SendMessageResult, DomainError> {
        self.send.handle(cmd).await
    }

    /// The signed-in user, if any.
    pub async fn current_user(&self) -> Option<UserId> {
        self.identity.current_user_id().await
    }

    /// The capability domains the engine routes across.
    pub fn registry(&self) -> &DomainRegistry {
        &self.registry
    }
}
