//! Breathing session engine.
//!
//! A countdown state machine with no internal thread. The caller owns the
//! periodic tick source and invokes `tick()` once per logical second; each
//! call is exactly one second of session time regardless of wall-clock drift.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//! Running -> Completed          (total countdown reaches zero)
//! Running | Paused -> Idle      (stop)
//! Completed -> Idle             (reset)
//! Completed -> Running          (start again)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = BreathingSessionEngine::new(pattern, duration);
//! engine.start();
//! // Once per second:
//! engine.tick(); // Some(Event) on phase change or completion
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pattern::{format_clock, BreathingPattern, Phase, PhaseKind, SessionDuration};
use crate::events::{Event, SessionObserver};
use crate::feedback::VisualTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Idle,
    Running,
    Paused,
    /// Terminal until `start()` or `reset()`.
    Completed,
}

/// Mutable session state, owned by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub pattern: BreathingPattern,
    pub duration: SessionDuration,
    pub status: SessionStatus,
    pub phase_index: usize,
    /// Seconds left in the current phase.
    pub phase_remaining: u32,
    /// Seconds left in the session.
    pub total_remaining: u32,
}

impl SessionState {
    fn idle(pattern: BreathingPattern, duration: SessionDuration) -> Self {
        Self {
            pattern,
            duration,
            status: SessionStatus::Idle,
            phase_index: 0,
            phase_remaining: 0,
            total_remaining: 0,
        }
    }
}

/// Flat, render-ready view of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub pattern: BreathingPattern,
    pub pattern_label: String,
    pub duration_secs: u32,
    pub phase_index: usize,
    pub phase_kind: PhaseKind,
    pub instruction: String,
    pub visual_target: VisualTarget,
    pub phase_remaining: u32,
    pub total_remaining: u32,
    /// `total_remaining` as `m:ss`.
    pub time_remaining: String,
    pub progress: f64,
}

pub struct BreathingSessionEngine {
    state: SessionState,
    observer: Option<Box<dyn SessionObserver>>,
}

impl fmt::Debug for BreathingSessionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreathingSessionEngine")
            .field("state", &self.state)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Default for BreathingSessionEngine {
    fn default() -> Self {
        Self::new(BreathingPattern::default(), SessionDuration::default())
    }
}

impl BreathingSessionEngine {
    /// Create an engine in the `Idle` state with the given selection.
    pub fn new(pattern: BreathingPattern, duration: SessionDuration) -> Self {
        Self {
            state: SessionState::idle(pattern, duration),
            observer: None,
        }
    }

    /// Register the single event consumer, replacing any previous one.
    pub fn set_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observer = Some(observer);
    }

    pub fn clear_observer(&mut self) -> Option<Box<dyn SessionObserver>> {
        self.observer.take()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn status(&self) -> SessionStatus {
        self.state.status
    }

    pub fn pattern(&self) -> BreathingPattern {
        self.state.pattern
    }

    pub fn duration(&self) -> SessionDuration {
        self.state.duration
    }

    pub fn phase_index(&self) -> usize {
        self.state.phase_index
    }

    pub fn phase_remaining(&self) -> u32 {
        self.state.phase_remaining
    }

    pub fn total_remaining(&self) -> u32 {
        self.state.total_remaining
    }

    pub fn state(&self) -> SessionState {
        self.state.clone()
    }

    pub fn current_phase(&self) -> Phase {
        self.state.pattern.phases()[self.state.phase_index]
    }

    pub fn instruction(&self) -> &'static str {
        self.current_phase().kind.instruction()
    }

    pub fn formatted_time_remaining(&self) -> String {
        format_clock(self.state.total_remaining)
    }

    /// Seconds of session time consumed so far (zero when no session has run).
    pub fn elapsed_secs(&self) -> u32 {
        match self.state.status {
            SessionStatus::Idle => 0,
            _ => self
                .state
                .duration
                .secs()
                .saturating_sub(self.state.total_remaining),
        }
    }

    /// 0.0 .. 1.0 progress across the whole session.
    pub fn progress(&self) -> f64 {
        let total = self.state.duration.secs();
        if total == 0 {
            return 0.0;
        }
        (self.elapsed_secs() as f64 / total as f64).min(1.0)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let phase = self.current_phase();
        SessionSnapshot {
            status: self.state.status,
            pattern: self.state.pattern,
            pattern_label: self.state.pattern.label().to_string(),
            duration_secs: self.state.duration.secs(),
            phase_index: self.state.phase_index,
            phase_kind: phase.kind,
            instruction: phase.kind.instruction().to_string(),
            visual_target: phase.kind.visual_target(),
            phase_remaining: self.state.phase_remaining,
            total_remaining: self.state.total_remaining,
            time_remaining: self.formatted_time_remaining(),
            progress: self.progress(),
        }
    }

    // ── Setup ────────────────────────────────────────────────────────

    /// Choose the pattern for the next session. Ignored unless the engine is
    /// `Idle` or `Completed`. The phase index returns to the first phase of
    /// the new table; the countdowns are left as they are.
    pub fn select_pattern(&mut self, pattern: BreathingPattern) -> bool {
        if !self.accepts_selection() {
            tracing::warn!(?pattern, status = ?self.state.status, "pattern selection ignored");
            return false;
        }
        self.state.pattern = pattern;
        self.state.phase_index = 0;
        true
    }

    /// Choose the duration for the next session. Ignored unless the engine is
    /// `Idle` or `Completed`.
    pub fn select_duration(&mut self, duration: SessionDuration) -> bool {
        if !self.accepts_selection() {
            tracing::warn!(?duration, status = ?self.state.status, "duration selection ignored");
            return false;
        }
        self.state.duration = duration;
        true
    }

    fn accepts_selection(&self) -> bool {
        matches!(
            self.state.status,
            SessionStatus::Idle | SessionStatus::Completed
        )
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a fresh session. Returns `PhaseChanged` for phase 0, or `None`
    /// if a session is already running.
    pub fn start(&mut self) -> Option<Event> {
        if self.state.status == SessionStatus::Running {
            return None;
        }
        let first = self.state.pattern.phases()[0];
        self.state.phase_index = 0;
        self.state.phase_remaining = first.duration_secs;
        self.state.total_remaining = self.state.duration.secs();
        self.state.status = SessionStatus::Running;
        tracing::info!(
            pattern = self.state.pattern.id(),
            duration_secs = self.state.total_remaining,
            "breathing session started"
        );
        Some(self.emit(Event::PhaseChanged {
            phase_index: 0,
            kind: first.kind,
            duration_secs: first.duration_secs,
        }))
    }

    pub fn pause(&mut self) -> bool {
        if self.state.status != SessionStatus::Running {
            return false;
        }
        self.state.status = SessionStatus::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state.status != SessionStatus::Paused {
            return false;
        }
        self.state.status = SessionStatus::Running;
        true
    }

    /// Pause when running, resume when paused.
    pub fn toggle_pause(&mut self) -> bool {
        match self.state.status {
            SessionStatus::Running => self.pause(),
            SessionStatus::Paused => self.resume(),
            _ => false,
        }
    }

    /// Abort the session without a completion event.
    pub fn stop(&mut self) -> bool {
        let was = self.state.status;
        if matches!(was, SessionStatus::Running | SessionStatus::Paused) {
            tracing::info!(
                remaining_secs = self.state.total_remaining,
                "breathing session stopped"
            );
        }
        self.clear_session();
        was != SessionStatus::Idle
    }

    /// Return to setup after a session. Same effect as `stop()`.
    pub fn reset(&mut self) -> bool {
        let was = self.state.status;
        self.clear_session();
        was != SessionStatus::Idle
    }

    /// Advance one second. No-op unless `Running`.
    ///
    /// Completion takes precedence over a phase boundary on the same tick.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state.status != SessionStatus::Running {
            return None;
        }

        self.state.total_remaining = self.state.total_remaining.saturating_sub(1);
        self.state.phase_remaining = self.state.phase_remaining.saturating_sub(1);

        if self.state.total_remaining == 0 {
            self.state.status = SessionStatus::Completed;
            tracing::info!(
                pattern = self.state.pattern.id(),
                duration_secs = self.state.duration.secs(),
                "breathing session completed"
            );
            return Some(self.emit(Event::SessionCompleted {
                pattern: self.state.pattern,
                duration_secs: self.state.duration.secs(),
            }));
        }

        if self.state.phase_remaining == 0 {
            return Some(self.advance());
        }

        None
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn advance(&mut self) -> Event {
        let phases = self.state.pattern.phases();
        let next = (self.state.phase_index + 1) % phases.len();
        let phase = phases[next];
        self.state.phase_index = next;
        self.state.phase_remaining = phase.duration_secs;
        tracing::debug!(
            phase_index = next,
            kind = ?phase.kind,
            total_remaining = self.state.total_remaining,
            "breathing phase changed"
        );
        self.emit(Event::PhaseChanged {
            phase_index: next,
            kind: phase.kind,
            duration_secs: phase.duration_secs,
        })
    }

    fn clear_session(&mut self) {
        self.state.status = SessionStatus::Idle;
        self.state.phase_index = 0;
        self.state.phase_remaining = 0;
        self.state.total_remaining = 0;
    }

    fn emit(&mut self, event: Event) -> Event {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&event);
        }
        event
    }
}
