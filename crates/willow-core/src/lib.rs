//! # Willow Core Library
//!
//! The non-visual logic of the Willow wellness app: guided breathing
//! sessions and time-of-day affirmation quotes. The `willow` CLI is a thin
//! front end over this crate.
//!
//! ## Architecture
//!
//! - **Breathing Engine**: A countdown state machine. The caller invokes
//!   `tick()` once per second and renders the events it returns
//! - **Feedback**: Haptic and animation collaborators driven by engine events
//! - **Quotes**: A fixed library rotated once per day per period
//! - **Storage**: SQLite key-value settings store and TOML configuration
//!
//! Collaborators are passed in through constructors behind one small trait
//! per role ([`Clock`], [`SettingsStore`], [`HapticFeedback`],
//! [`BreathAnimator`]), so every piece can be built in isolation.
//!
//! ## Key Components
//!
//! - [`BreathingSessionEngine`]: Breathing session state machine
//! - [`DailyQuotes`]: Daily quote rotation
//! - [`Database`]: Settings persistence
//! - [`Config`]: Application configuration management

pub mod breathing;
pub mod error;
pub mod events;
pub mod feedback;
pub mod period;
pub mod quotes;
pub mod storage;

pub use breathing::{
    format_clock, BreathingPattern, BreathingSessionEngine, Phase, PhaseKind, SessionDuration,
    SessionSnapshot, SessionState, SessionStatus,
};
pub use error::{ConfigError, CoreError, Result, StorageError, ValidationError};
pub use events::{Event, SessionObserver};
pub use feedback::{
    BreathAnimator, FeedbackObserver, HapticFeedback, ImpactStyle, NoopHaptics, NotificationKind,
    VisualTarget,
};
pub use period::{Clock, FixedClock, SystemClock, TimePeriod};
pub use quotes::{DailyQuotes, Quote, QuoteBook};
pub use storage::{Config, Database, MemoryStore, SettingsStore};
