//! Message router: classification and metadata assembly.
//!
//! Pure function of its inputs — no generation, no I/O. Safe to evaluate
//! fully in parallel across users and requests.

use serde::{Deserialize, Serialize};

use super::{AgentDomain, ConversationContext, DomainAction, DomainId, DomainRegistry};

/// A small labelled figure a domain wants shown alongside its reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayStat {
    pub label: String,
    pub value: String,
}

/// Candidate response descriptor for one matched domain.
///
/// Content generation is delegated to the generation collaborator; this
/// carries only classification output and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainMatch {
    pub domain_id: DomainId,
    pub display_name: String,
    /// Suggested opener for the generation collaborator.
    pub reply_skeleton: String,
    pub follow_up_actions: Vec<DomainAction>,
    pub display_stats: Vec<DisplayStat>,
}

/// Routing result: ordered matches plus the shared ambient context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutedMessage {
    /// Matches in registry order. Empty when no domain matched; the
    /// application layer falls back to the general domain.
    pub matches: Vec<DomainMatch>,
    pub context: ConversationContext,
}

/// Matches messages against the domain registry.
#[derive(Debug, Clone, Default)]
pub struct MessageRouter {
    registry: DomainRegistry,
}

impl MessageRouter {
    /// Creates a router over a registry.
    pub fn new(registry: DomainRegistry) -> Self {
        Self { registry }
    }

    /// Returns the registry this router matches against.
    pub fn registry(&self) -> &DomainRegistry {
        &self.registry
    }

    /// Evaluates every domain's rule against the message and collects
    /// all matches, preserving registry order. Domains are non-exclusive:
    /// a message may legitimately activate several at once.
    pub fn route(&self, text: &str, context: ConversationContext) -> RoutedMessage {
        let matches = self
            .registry
            .iter()
            .filter(|domain| domain.rule.matches(text))
            .map(|domain| self.describe(domain, &context))
            .collect();

        RoutedMessage { matches, context }
    }

    /// Builds the general-domain descriptor used when nothing matched.
    pub fn fallback(&self, context: &ConversationContext) -> Option<DomainMatch> {
        self.registry.general().map(|d| self.describe(d, context))
    }

    fn describe(&self, domain: &AgentDomain, context: &ConversationContext) -> DomainMatch {
        DomainMatch {
            domain_id: domain.id,
            display_name: domain.display_name.clone(),
            reply_skeleton: domain.reply_skeleton.clone(),
            follow_up_actions: domain.actions.clone(),
            display_stats: Self::stats_for(domain.id, context),
        }
    }

    fn stats_for(id: DomainId, context: &ConversationContext) -> Vec<DisplayStat> {
        match id {
            DomainId::Mood => vec![DisplayStat {
                label: "Burnout".into(),
                value: format!("{}%", context.burnout.value()),
            }],
            DomainId::Focus if context.focus_session_active => vec![DisplayStat {
                label: "Focus session".into(),
                value: "active".into(),
            }],
            _ => vec![],
        }
    }
}
