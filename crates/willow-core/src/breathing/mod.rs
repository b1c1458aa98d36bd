mod engine;
mod pattern;

pub use engine::{BreathingSessionEngine, SessionSnapshot, SessionState, SessionStatus};
pub use pattern::{format_clock, BreathingPattern, Phase, PhaseKind, SessionDuration};
