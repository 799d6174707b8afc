//! Autonomy modes and their resolution.

use serde::{Deserialize, Serialize};

/// Policy governing how independently a domain may act on the user's
/// behalf without additional confirmation.
///
/// User-settable globally; the resolver may substitute a per-domain
/// default. Not persisted by this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutonomyMode {
    /// Act only on explicit instruction.
    DoAsTold,
    /// Suggest actions; wait for approval.
    SuggestApprove,
    /// Predict the next action; confirm before acting.
    PredictConfirm,
    /// Act without confirmation.
    FullAuto,
    /// Defer to each domain's declared default.
    Adaptive,
}

impl AutonomyMode {
    /// Resolves the effective mode for one exchange.
    ///
    /// An explicit global mode wins outright; `Adaptive` means "let the
    /// system decide per-context" and resolves to the domain's default.
    pub fn resolve(global: AutonomyMode, domain_default: AutonomyMode) -> AutonomyMode {
        match global {
            AutonomyMode::Adaptive => domain_default,
            explicit => explicit,
        }
    }

    /// Returns the snake_case name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            AutonomyMode::DoAsTold => "do_as_told",
            AutonomyMode::SuggestApprove => "suggest_approve",
            AutonomyMode::PredictConfirm => "predict_confirm",
            AutonomyMode::FullAuto => "full_auto",
            AutonomyMode::Adaptive => "adaptive",
        }
    }
}

impl std::fmt::Display for AutonomyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
