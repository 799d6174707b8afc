//! Intent routing: capability domains, ambient context, and autonomy.

mod autonomy;
mod context;
mod registry;
mod router;

pub use autonomy::AutonomyMode;
pub use context::{
    BurnoutScore, ConversationContext, EnergyLevel, Mood, StressLevel, TimeOfDay,
};
pub use registry::{AgentDomain, DomainAction, DomainId, DomainRegistry, MatchRule};
pub use router::{DisplayStat, DomainMatch, MessageRouter, RoutedMessage};
