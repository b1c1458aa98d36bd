//! Haptic and animation collaborators.
//!
//! The engine only emits events. `FeedbackObserver` turns those events into
//! a light pulse per phase, an indicator animation spanning the phase, and a
//! success signal at the end of the session.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::events::{Event, SessionObserver};

/// Resting state of the breathing indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualTarget {
    Expanded,
    Contracted,
}

impl VisualTarget {
    pub fn scale(self) -> f64 {
        match self {
            VisualTarget::Expanded => 1.0,
            VisualTarget::Contracted => 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

pub trait HapticFeedback {
    fn impact(&self, style: ImpactStyle);
    fn notify(&self, kind: NotificationKind);
}

pub trait BreathAnimator {
    /// Move the indicator toward `target`, arriving after `over`.
    fn animate_to(&mut self, target: VisualTarget, over: Duration);
}

/// Haptics for hosts without a vibration motor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHaptics;

impl HapticFeedback for NoopHaptics {
    fn impact(&self, _style: ImpactStyle) {}
    fn notify(&self, _kind: NotificationKind) {}
}

pub struct FeedbackObserver<H, A> {
    haptics: H,
    animator: A,
    haptics_enabled: bool,
}

impl<H: HapticFeedback, A: BreathAnimator> FeedbackObserver<H, A> {
    pub fn new(haptics: H, animator: A) -> Self {
        Self {
            haptics,
            animator,
            haptics_enabled: true,
        }
    }

    /// Mute or unmute haptics. Animation is unaffected.
    pub fn with_haptics(mut self, enabled: bool) -> Self {
        self.haptics_enabled = enabled;
        self
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn haptics(&self) -> &H {
        &self.haptics
    }
}

impl<H: HapticFeedback, A: BreathAnimator> SessionObserver for FeedbackObserver<H, A> {
    fn on_event(&mut self, event: &Event) {
        match event {
            Event::PhaseChanged {
                kind,
                duration_secs,
                ..
            } => {
                if self.haptics_enabled {
                    self.haptics.impact(ImpactStyle::Light);
                }
                self.animator.animate_to(
                    kind.visual_target(),
                    Duration::from_secs(u64::from(*duration_secs)),
                );
            }
            Event::SessionCompleted { .. } => {
                if self.haptics_enabled {
                    self.haptics.notify(NotificationKind::Success);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breathing::{BreathingPattern, BreathingSessionEngine, PhaseKind, SessionDuration};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct RecordingHaptics {
        impacts: Rc<RefCell<Vec<ImpactStyle>>>,
        notifications: Rc<RefCell<Vec<NotificationKind>>>,
    }

    impl HapticFeedback for RecordingHaptics {
        fn impact(&self, style: ImpactStyle) {
            self.impacts.borrow_mut().push(style);
        }
        fn notify(&self, kind: NotificationKind) {
            self.notifications.borrow_mut().push(kind);
        }
    }

    #[derive(Default, Clone)]
    struct RecordingAnimator {
        moves: Rc<RefCell<Vec<(VisualTarget, Duration)>>>,
    }

    impl BreathAnimator for RecordingAnimator {
        fn animate_to(&mut self, target: VisualTarget, over: Duration) {
            self.moves.borrow_mut().push((target, over));
        }
    }

    #[test]
    fn scales() {
        assert_eq!(VisualTarget::Expanded.scale(), 1.0);
        assert_eq!(VisualTarget::Contracted.scale(), 0.5);
    }

    #[test]
    fn phase_change_pulses_and_animates_over_phase() {
        let haptics = RecordingHaptics::default();
        let animator = RecordingAnimator::default();
        let mut observer = FeedbackObserver::new(haptics.clone(), animator.clone());

        observer.on_event(&Event::PhaseChanged {
            phase_index: 1,
            kind: PhaseKind::Exhale,
            duration_secs: 6,
        });

        assert_eq!(*haptics.impacts.borrow(), vec![ImpactStyle::Light]);
        assert_eq!(
            *animator.moves.borrow(),
            vec![(VisualTarget::Contracted, Duration::from_secs(6))]
        );
    }

    #[test]
    fn completion_signals_success_only() {
        let haptics = RecordingHaptics::default();
        let animator = RecordingAnimator::default();
        let mut observer = FeedbackObserver::new(haptics.clone(), animator.clone());

        observer.on_event(&Event::SessionCompleted {
            pattern: BreathingPattern::Relaxed,
            duration_secs: 60,
        });

        assert!(haptics.impacts.borrow().is_empty());
        assert_eq!(*haptics.notifications.borrow(), vec![NotificationKind::Success]);
        assert!(animator.moves.borrow().is_empty());
    }

    #[test]
    fn muted_haptics_still_animate() {
        let haptics = RecordingHaptics::default();
        let animator = RecordingAnimator::default();
        let mut observer =
            FeedbackObserver::new(haptics.clone(), animator.clone()).with_haptics(false);

        observer.on_event(&Event::PhaseChanged {
            phase_index: 0,
            kind: PhaseKind::Inhale,
            duration_secs: 4,
        });
        observer.on_event(&Event::SessionCompleted {
            pattern: BreathingPattern::Relaxed,
            duration_secs: 60,
        });

        assert!(haptics.impacts.borrow().is_empty());
        assert!(haptics.notifications.borrow().is_empty());
        assert_eq!(animator.moves.borrow().len(), 1);
    }

    #[test]
    fn drives_feedback_through_a_full_session() {
        let haptics = RecordingHaptics::default();
        let animator = RecordingAnimator::default();
        let mut engine =
            BreathingSessionEngine::new(BreathingPattern::Relaxed, SessionDuration::OneMinute);
        engine.set_observer(Box::new(FeedbackObserver::new(
            haptics.clone(),
            animator.clone(),
        )));

        engine.start();
        for _ in 0..60 {
            engine.tick();
        }

        // Phases start at 0, 4, 10, 14, .., 54: twelve in a minute.
        assert_eq!(haptics.impacts.borrow().len(), 12);
        assert_eq!(*haptics.notifications.borrow(), vec![NotificationKind::Success]);
        let moves = animator.moves.borrow();
        assert_eq!(moves[0], (VisualTarget::Expanded, Duration::from_secs(4)));
        assert_eq!(moves[1], (VisualTarget::Contracted, Duration::from_secs(6)));
    }
}
