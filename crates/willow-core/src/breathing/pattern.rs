use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::feedback::VisualTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Inhale,
    HoldAfterInhale,
    Exhale,
    HoldAfterExhale,
}

impl PhaseKind {
    /// Instruction label shown while this phase is active.
    pub fn instruction(self) -> &'static str {
        match self {
            PhaseKind::Inhale => "Breathe In",
            PhaseKind::HoldAfterInhale | PhaseKind::HoldAfterExhale => "Hold",
            PhaseKind::Exhale => "Breathe Out",
        }
    }

    /// Where the breathing indicator should be headed during this phase.
    pub fn visual_target(self) -> VisualTarget {
        match self {
            PhaseKind::Inhale | PhaseKind::HoldAfterInhale => VisualTarget::Expanded,
            PhaseKind::Exhale | PhaseKind::HoldAfterExhale => VisualTarget::Contracted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub kind: PhaseKind,
    /// Always positive.
    pub duration_secs: u32,
}

impl Phase {
    const fn new(kind: PhaseKind, duration_secs: u32) -> Self {
        Self {
            kind,
            duration_secs,
        }
    }
}

const RELAXED: [Phase; 2] = [
    Phase::new(PhaseKind::Inhale, 4),
    Phase::new(PhaseKind::Exhale, 6),
];

const BOX_BREATHING: [Phase; 4] = [
    Phase::new(PhaseKind::Inhale, 4),
    Phase::new(PhaseKind::HoldAfterInhale, 4),
    Phase::new(PhaseKind::Exhale, 4),
    Phase::new(PhaseKind::HoldAfterExhale, 4),
];

const FOUR_SEVEN_EIGHT: [Phase; 3] = [
    Phase::new(PhaseKind::Inhale, 4),
    Phase::new(PhaseKind::HoldAfterInhale, 7),
    Phase::new(PhaseKind::Exhale, 8),
];

/// A fixed breathing technique: an ordered, cyclic list of phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreathingPattern {
    #[default]
    Relaxed,
    BoxBreathing,
    FourSevenEight,
}

impl BreathingPattern {
    pub const ALL: [BreathingPattern; 3] = [
        BreathingPattern::Relaxed,
        BreathingPattern::BoxBreathing,
        BreathingPattern::FourSevenEight,
    ];

    /// Phase table for this pattern. Never empty.
    pub fn phases(self) -> &'static [Phase] {
        match self {
            BreathingPattern::Relaxed => &RELAXED,
            BreathingPattern::BoxBreathing => &BOX_BREATHING,
            BreathingPattern::FourSevenEight => &FOUR_SEVEN_EIGHT,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            BreathingPattern::Relaxed => "relaxed",
            BreathingPattern::BoxBreathing => "box_breathing",
            BreathingPattern::FourSevenEight => "four_seven_eight",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BreathingPattern::Relaxed => "Relaxed",
            BreathingPattern::BoxBreathing => "Box Breathing",
            BreathingPattern::FourSevenEight => "4-7-8",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BreathingPattern::Relaxed => "Gentle breathing for calm",
            BreathingPattern::BoxBreathing => "Equal phases for focus",
            BreathingPattern::FourSevenEight => "Deep relaxation technique",
        }
    }

    /// Length of one full pass through the phase table.
    pub fn cycle_duration_secs(self) -> u32 {
        self.phases().iter().map(|p| p.duration_secs).sum()
    }
}

impl fmt::Display for BreathingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BreathingPattern {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "relaxed" => Ok(BreathingPattern::Relaxed),
            "box_breathing" | "box" => Ok(BreathingPattern::BoxBreathing),
            "four_seven_eight" | "4_7_8" | "478" => Ok(BreathingPattern::FourSevenEight),
            _ => Err(ValidationError::invalid(
                "pattern",
                format!("unknown pattern '{s}' (expected relaxed, box_breathing or four_seven_eight)"),
            )),
        }
    }
}

/// Total length of a session, chosen before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SessionDuration {
    #[default]
    OneMinute,
    ThreeMinutes,
    FiveMinutes,
}

impl SessionDuration {
    pub const ALL: [SessionDuration; 3] = [
        SessionDuration::OneMinute,
        SessionDuration::ThreeMinutes,
        SessionDuration::FiveMinutes,
    ];

    pub fn secs(self) -> u32 {
        match self {
            SessionDuration::OneMinute => 60,
            SessionDuration::ThreeMinutes => 180,
            SessionDuration::FiveMinutes => 300,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SessionDuration::OneMinute => "1 min",
            SessionDuration::ThreeMinutes => "3 min",
            SessionDuration::FiveMinutes => "5 min",
        }
    }
}

impl fmt::Display for SessionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<SessionDuration> for u32 {
    fn from(d: SessionDuration) -> Self {
        d.secs()
    }
}

impl TryFrom<u32> for SessionDuration {
    type Error = ValidationError;

    fn try_from(secs: u32) -> Result<Self, Self::Error> {
        SessionDuration::ALL
            .into_iter()
            .find(|d| d.secs() == secs)
            .ok_or_else(|| {
                ValidationError::invalid(
                    "duration",
                    format!("{secs}s is not a session length (expected 60, 180 or 300)"),
                )
            })
    }
}

impl FromStr for SessionDuration {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_ascii_lowercase();
        let parsed = if let Some(minutes) = trimmed.strip_suffix('m') {
            minutes.trim().parse::<u32>().ok().map(|m| m.saturating_mul(60))
        } else if let Some(secs) = trimmed.strip_suffix('s') {
            secs.trim().parse::<u32>().ok()
        } else {
            // Bare 1/3/5 read as minutes, anything else as seconds.
            trimmed.parse::<u32>().ok().map(|n| match n {
                1 | 3 | 5 => n * 60,
                other => other,
            })
        };
        match parsed {
            Some(secs) => SessionDuration::try_from(secs),
            None => Err(ValidationError::invalid(
                "duration",
                format!("cannot parse '{s}' as a session length"),
            )),
        }
    }
}

/// Render seconds as `m:ss`.
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_has_positive_phases() {
        for pattern in BreathingPattern::ALL {
            assert!(!pattern.phases().is_empty(), "{pattern} has no phases");
            assert!(pattern.phases().iter().all(|p| p.duration_secs > 0));
        }
    }

    #[test]
    fn cycle_durations() {
        assert_eq!(BreathingPattern::Relaxed.cycle_duration_secs(), 10);
        assert_eq!(BreathingPattern::BoxBreathing.cycle_duration_secs(), 16);
        assert_eq!(BreathingPattern::FourSevenEight.cycle_duration_secs(), 19);
    }

    #[test]
    fn instruction_labels() {
        assert_eq!(PhaseKind::Inhale.instruction(), "Breathe In");
        assert_eq!(PhaseKind::HoldAfterInhale.instruction(), "Hold");
        assert_eq!(PhaseKind::Exhale.instruction(), "Breathe Out");
        assert_eq!(PhaseKind::HoldAfterExhale.instruction(), "Hold");
    }

    #[test]
    fn holds_keep_the_previous_direction() {
        assert_eq!(PhaseKind::HoldAfterInhale.visual_target(), VisualTarget::Expanded);
        assert_eq!(PhaseKind::HoldAfterExhale.visual_target(), VisualTarget::Contracted);
    }

    #[test]
    fn pattern_parses_ids_and_aliases() {
        assert_eq!("relaxed".parse::<BreathingPattern>().unwrap(), BreathingPattern::Relaxed);
        assert_eq!("Box Breathing".parse::<BreathingPattern>().unwrap(), BreathingPattern::BoxBreathing);
        assert_eq!("box-breathing".parse::<BreathingPattern>().unwrap(), BreathingPattern::BoxBreathing);
        assert_eq!("4-7-8".parse::<BreathingPattern>().unwrap(), BreathingPattern::FourSevenEight);
        assert_eq!("478".parse::<BreathingPattern>().unwrap(), BreathingPattern::FourSevenEight);
        assert!("panic".parse::<BreathingPattern>().is_err());
    }

    #[test]
    fn pattern_id_round_trips_through_from_str() {
        for pattern in BreathingPattern::ALL {
            assert_eq!(pattern.id().parse::<BreathingPattern>().unwrap(), pattern);
        }
    }

    #[test]
    fn duration_parses_minutes_and_seconds() {
        assert_eq!("60".parse::<SessionDuration>().unwrap(), SessionDuration::OneMinute);
        assert_eq!("3m".parse::<SessionDuration>().unwrap(), SessionDuration::ThreeMinutes);
        assert_eq!("5".parse::<SessionDuration>().unwrap(), SessionDuration::FiveMinutes);
        assert_eq!("300s".parse::<SessionDuration>().unwrap(), SessionDuration::FiveMinutes);
        assert!("2m".parse::<SessionDuration>().is_err());
        assert!("soon".parse::<SessionDuration>().is_err());
    }

    #[test]
    fn duration_serializes_as_seconds() {
        let json = serde_json::to_string(&SessionDuration::ThreeMinutes).unwrap();
        assert_eq!(json, "180");
        let parsed: SessionDuration = serde_json::from_str("300").unwrap();
        assert_eq!(parsed, SessionDuration::FiveMinutes);
        assert!(serde_json::from_str::<SessionDuration>("90").is_err());
    }

    #[test]
    fn clock_format() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(59), "0:59");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(300), "5:00");
    }
}
