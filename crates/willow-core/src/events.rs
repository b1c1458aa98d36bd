use serde::{Deserialize, Serialize};

use crate::breathing::{BreathingPattern, PhaseKind};

/// Lifecycle notifications produced by the breathing engine.
///
/// Every event is returned from the command that caused it and is also
/// delivered to the engine's registered observer, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A new phase began (including phase 0 on start).
    PhaseChanged {
        phase_index: usize,
        kind: PhaseKind,
        duration_secs: u32,
    },
    /// The session ran its full duration.
    SessionCompleted {
        pattern: BreathingPattern,
        duration_secs: u32,
    },
}

/// Single synchronous consumer of engine events.
pub trait SessionObserver {
    fn on_event(&mut self, event: &Event);
}

impl<F> SessionObserver for F
where
    F: FnMut(&Event),
{
    fn on_event(&mut self, event: &Event) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_tagged_by_type() {
        let event = Event::PhaseChanged {
            phase_index: 1,
            kind: PhaseKind::Exhale,
            duration_secs: 6,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "PhaseChanged");
        assert_eq!(json["kind"], "exhale");
        assert_eq!(json["duration_secs"], 6);
    }

    #[test]
    fn closures_are_observers() {
        let mut seen = Vec::new();
        {
            let mut observer = |e: &Event| seen.push(e.clone());
            observer.on_event(&Event::SessionCompleted {
                pattern: BreathingPattern::Relaxed,
                duration_secs: 60,
            });
        }
        assert_eq!(seen.len(), 1);
    }
}
