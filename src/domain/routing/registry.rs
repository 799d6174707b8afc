//! Capability domain registry.
//!
//! Static catalog of the areas a message can be routed to. Domains are
//! intentionally non-exclusive: a message may activate several at once.

use serde::{Deserialize, Serialize};

use super::AutonomyMode;

/// Identifier of a capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainId {
    Reminders,
    Fitness,
    Finance,
    Routine,
    Mood,
    Focus,
    /// Fallback for messages matching no other domain.
    General,
}

impl DomainId {
    /// Returns the snake_case name of this domain.
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainId::Reminders => "reminders",
            DomainId::Fitness => "fitness",
            DomainId::Finance => "finance",
            DomainId::Routine => "routine",
            DomainId::Mood => "mood",
            DomainId::Focus => "focus",
            DomainId::General => "general",
        }
    }
}

impl std::fmt::Display for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Matching rule over message text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// Matches when the lowercased message contains any keyword.
    AnyKeyword(Vec<String>),
    /// Never matches; the domain is selected only as a fallback.
    FallbackOnly,
}

impl MatchRule {
    /// Builds a keyword rule from string literals.
    pub fn keywords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MatchRule::AnyKeyword(words.into_iter().map(Into::into).collect())
    }

    /// Evaluates the rule against a message.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            MatchRule::AnyKeyword(words) => {
                let lowered = text.to_lowercase();
                words.iter().any(|w| lowered.contains(w.as_str()))
            }
            MatchRule::FallbackOnly => false,
        }
    }
}

/// A follow-up action a domain can offer, declared with the parameters
/// the generation collaborator must fill in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainAction {
    pub name: String,
    pub required_params: Vec<String>,
}

impl DomainAction {
    pub fn new<I, S>(name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            required_params: params.into_iter().map(Into::into).collect(),
        }
    }
}

/// One entry in the domain registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDomain {
    pub id: DomainId,
    pub display_name: String,
    pub rule: MatchRule,
    /// Default posture when the user's global mode is `adaptive`.
    /// Never `Adaptive` itself.
    pub default_autonomy: AutonomyMode,
    /// Suggested opener the generation collaborator elaborates on.
    pub reply_skeleton: String,
    pub actions: Vec<DomainAction>,
}

/// Immutable, ordered catalog of capability domains.
///
/// Registry order is the tie-break order for matches, so entries are
/// listed from most to least specific.
#[derive(Debug, Clone)]
pub struct DomainRegistry {
    domains: Vec<AgentDomain>,
}

impl DomainRegistry {
    /// Builds a registry from explicit entries, for tests and overrides.
    pub fn new(domains: Vec<AgentDomain>) -> Self {
        Self { domains }
    }

    /// Iterates entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &AgentDomain> {
        self.domains.iter()
    }

    /// Looks up a domain by id.
    pub fn get(&self, id: DomainId) -> Option<&AgentDomain> {
        self.domains.iter().find(|d| d.id == id)
    }

    /// The fallback entry for unmatched messages.
    pub fn general(&self) -> Option<&AgentDomain> {
        self.get(DomainId::General)
    }

    /// Default autonomy posture for a domain.
    ///
    /// Unknown ids resolve to the general domain's posture.
    pub fn default_autonomy(&self, id: DomainId) -> AutonomyMode {
        self.get(id)
            .or_else(|| self.general())
            .map(|d| d.default_autonomy)
            .unwrap_or(AutonomyMode::SuggestApprove)
    }
}

impl Default for DomainRegistry {
    fn default() -> Self {
        Self::new(vec![
            AgentDomain {
                id: DomainId::Reminders,
                display_name: "Reminders".into(),
                rule: MatchRule::keywords(["remind me", "reminder", "don't forget"]),
                default_autonomy: AutonomyMode::PredictConfirm,
                reply_skeleton: "I can set that reminder for you.".into(),
                actions: vec![DomainAction::new("create_reminder", ["title", "time"])],
            },
            AgentDomain {
                id: DomainId::Fitness,
                display_name: "Fitness".into(),
                rule: MatchRule::keywords(["workout", "exercise", "gym", "steps", "run"]),
                default_autonomy: AutonomyMode::SuggestApprove,
                reply_skeleton: "Let's look at your training together.".into(),
                actions: vec![DomainAction::new("log_workout", ["activity", "duration"])],
            },
            AgentDomain {
                id: DomainId::Finance,
                display_name: "Finance".into(),
                rule: MatchRule::keywords(["budget", "spend", "money", "bill", "savings"]),
                default_autonomy: AutonomyMode::DoAsTold,
                reply_skeleton: "Here's where your money stands.".into(),
                actions: vec![DomainAction::new("log_expense", ["amount", "category"])],
            },
            AgentDomain {
                id: DomainId::Routine,
                display_name: "Routine".into(),
                rule: MatchRule::keywords(["schedule", "routine", "plan my day", "habit"]),
                default_autonomy: AutonomyMode::SuggestApprove,
                reply_skeleton: "Let's shape your day.".into(),
                actions: vec![DomainAction::new("adjust_routine", ["slot", "activity"])],
            },
            AgentDomain {
                id: DomainId::Mood,
                display_name: "Mood".into(),
                rule: MatchRule::keywords(["feeling", "mood", "sad", "anxious", "stressed"]),
                default_autonomy: AutonomyMode::SuggestApprove,
                reply_skeleton: "Thanks for telling me how you feel.".into(),
                actions: vec![DomainAction::new("log_mood", ["mood"])],
            },
            AgentDomain {
                id: DomainId::Focus,
                display_name: "Focus".into(),
                rule: MatchRule::keywords(["focus", "deep work", "pomodoro", "distracted"]),
                default_autonomy: AutonomyMode::PredictConfirm,
                reply_skeleton: "Ready to protect some focus time?".into(),
                actions: vec![DomainAction::new("start_focus_session", ["duration"])],
            },
            AgentDomain {
                id: DomainId::General,
                display_name: "General".into(),
                rule: MatchRule::FallbackOnly,
                default_autonomy: AutonomyMode::SuggestApprove,
                reply_skeleton: "I'm here.".into(),
                actions: vec![],
            },
        ])
    }
}
