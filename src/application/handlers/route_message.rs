//! RouteMessageHandler - Classify a message into capability domains.

use std::sync::Arc;

use crate::domain::routing::{ConversationContext, MessageRouter, RoutedMessage};

/// Handler for the `route_message` operation.
///
/// Wraps the pure router and applies the unknown-domain fallback: a
/// message matching no registry entry routes to the general-purpose
/// domain rather than erroring.
pub struct RouteMessageHandler {
    router: Arc<MessageRouter>,
}

impl RouteMessageHandler {
    pub fn new(router: Arc<MessageRouter>) -> Self {
        Self { router }
    }

    pub fn handle(&self, text: &str, context: ConversationContext) -> RoutedMessage {
        let mut routed = self.router.route(text, context);

        if routed.matches.is_empty() {
            tracing::debug!("no domain matched, falling back to general");
            if let Some(general) = self.router.fallback(&routed.context) {
                routed.matches.push(general);
            }
        } else {
            let ids: Vec<&str> = routed.matches.iter().map(|m| m.domain_id.as_str()).collect();
            tracing::debug!(domains = ?ids, "message routed");
        }

        routed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::routing::DomainId;

    fn handler() -> RouteMessageHandler {
        RouteMessageHandler::new(Arc::new(MessageRouter::default()))
    }

    #[test]
    fn matched_message_keeps_its_domains() {
        let routed = handler().handle("remind me to call mom at 5pm", ConversationContext::default());
        assert_eq!(routed.matches.len(), 1);
        assert_eq!(routed.matches[0].domain_id, DomainId::Reminders);
    }

    #[test]
    fn unmatched_message_falls_back_to_general() {
        let routed = handler().handle("what's the capital of france", ConversationContext::default());
        assert_eq!(routed.matches.len(), 1);
        assert_eq!(routed.matches[0].domain_id, DomainId::General);
    }

    #[test]
    fn fallback_never_shadows_real_matches() {
        let routed = handler().handle("plan my day", ConversationContext::default());
        assert!(routed
            .matches
            .iter()
            .all(|m| m.domain_id != DomainId::General));
    }
}
