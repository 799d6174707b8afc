//! Metered action kinds.

use serde::{Deserialize, Serialize};

/// A classified kind of metered interaction.
///
/// Every admission decision is keyed by one of these. Adding a kind is a
/// compile-time-checked change: tier definitions and consumption counters
/// match exhaustively on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Ordinary conversational reply. The primary action: usage
    /// percentages and warnings are computed against its quota.
    Reply,
    /// Extended-reasoning reply.
    DeepThought,
    /// Spoken reply via voice synthesis.
    VoiceReply,
    /// Image or other media generation.
    MediaGeneration,
}

impl ActionKind {
    /// All action kinds, in a stable order.
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Reply,
        ActionKind::DeepThought,
        ActionKind::VoiceReply,
        ActionKind::MediaGeneration,
    ];

    /// Returns the snake_case name of this action kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Reply => "reply",
            ActionKind::DeepThought => "deep_thought",
            ActionKind::VoiceReply => "voice_reply",
            ActionKind::MediaGeneration => "media_generation",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ActionKind::DeepThought).unwrap();
        assert_eq!(json, "\"deep_thought\"");
    }

    #[test]
    fn action_kind_deserializes_from_snake_case() {
        let kind: ActionKind = serde_json::from_str("\"voice_reply\"").unwrap();
        assert_eq!(kind, ActionKind::VoiceReply);
    }

    #[test]
    fn all_contains_every_kind_once() {
        assert_eq!(ActionKind::ALL.len(), 4);
        assert_eq!(ActionKind::ALL[0], ActionKind::Reply);
    }
}
