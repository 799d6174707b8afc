//! Ambient conversation context.
//!
//! Externally computed signals describing user state, supplied fresh per
//! request by collaborators. Read-only to this core and never retained.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Self-reported or inferred mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Great,
    Good,
    #[default]
    Neutral,
    Low,
    Stressed,
}

/// Current energy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    High,
    #[default]
    Medium,
    Low,
}

/// Coarse time-of-day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Buckets a 24h clock hour.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

/// Current stress level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    #[default]
    Low,
    Moderate,
    High,
}

/// Burnout score in `[0, 100]`, computed by a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct BurnoutScore(u8);

impl BurnoutScore {
    /// Creates a score, rejecting values over 100.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range("burnout_score", 0, 100, value as i32));
        }
        Ok(Self(value))
    }

    /// Returns the raw score.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Whether the score indicates elevated burnout.
    pub fn is_elevated(&self) -> bool {
        self.0 >= 70
    }
}

/// Ambient signals attached to every routed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConversationContext {
    pub mood: Mood,
    pub energy: EnergyLevel,
    pub time_of_day: TimeOfDay,
    pub stress: StressLevel,
    pub burnout: BurnoutScore,
    /// Whether a focus session is currently active.
    pub focus_session_active: bool,
    /// Whether it is within the user's declared work hours.
    pub within_work_hours: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burnout_score_rejects_over_100() {
        assert!(BurnoutScore::new(101).is_err());
        assert!(BurnoutScore::new(100).is_ok());
    }

    #[test]
    fn burnout_score_flags_elevated_at_70() {
        assert!(!BurnoutScore::new(69).unwrap().is_elevated());
        assert!(BurnoutScore::new(70).unwrap().is_elevated());
    }

    #[test]
    fn time_of_day_buckets_cover_the_clock() {
        assert_eq!(TimeOfDay::from_hour(6), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(13), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(19), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(2), TimeOfDay::Night);
    }

    #[test]
    fn default_context_is_neutral() {
        let ctx = ConversationContext::default();
        assert_eq!(ctx.mood, Mood::Neutral);
        assert_eq!(ctx.stress, StressLevel::Low);
        assert!(!ctx.focus_session_active);
    }

    #[test]
    fn context_serializes_to_json() {
        let ctx = ConversationContext::default();
        let json = serde_json::to_string(&ctx).unwrap();
        assert!(json.contains("\"mood\":\"neutral\""));
    }
}
