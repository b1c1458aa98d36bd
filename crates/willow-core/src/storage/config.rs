//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Default breathing pattern and session length
//! - Whether haptic feedback is enabled
//! - Daily reminder toggles and times per period
//!
//! Configuration is stored at `<data dir>/config.toml`.

use std::path::{Path, PathBuf};

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::breathing::{BreathingPattern, SessionDuration};
use crate::error::{ConfigError, ValidationError};
use crate::period::TimePeriod;

/// Defaults for the breathing screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreathingConfig {
    #[serde(default)]
    pub pattern: BreathingPattern,
    #[serde(default)]
    pub duration: SessionDuration,
    #[serde(default = "default_true")]
    pub haptics: bool,
}

/// One daily reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(default)]
    pub enabled: bool,
    /// Local time as `HH:MM`.
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemindersConfig {
    #[serde(default = "default_morning")]
    pub morning: Reminder,
    #[serde(default = "default_day")]
    pub day: Reminder,
    #[serde(default = "default_evening")]
    pub evening: Reminder,
    #[serde(default = "default_night")]
    pub night: Reminder,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data dir>/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub breathing: BreathingConfig,
    #[serde(default)]
    pub reminders: RemindersConfig,
}

fn default_true() -> bool {
    true
}
fn reminder_at(time: &str) -> Reminder {
    Reminder {
        enabled: false,
        time: time.into(),
    }
}
fn default_morning() -> Reminder {
    reminder_at("07:00")
}
fn default_day() -> Reminder {
    reminder_at("12:00")
}
fn default_evening() -> Reminder {
    reminder_at("18:00")
}
fn default_night() -> Reminder {
    reminder_at("21:00")
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            pattern: BreathingPattern::default(),
            duration: SessionDuration::default(),
            haptics: true,
        }
    }
}

impl Default for RemindersConfig {
    fn default() -> Self {
        Self {
            morning: default_morning(),
            day: default_day(),
            evening: default_evening(),
            night: default_night(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            breathing: BreathingConfig::default(),
            reminders: RemindersConfig::default(),
        }
    }
}

impl RemindersConfig {
    pub fn for_period(&self, period: TimePeriod) -> &Reminder {
        match period {
            TimePeriod::Morning => &self.morning,
            TimePeriod::Day => &self.day,
            TimePeriod::Evening => &self.evening,
            TimePeriod::Night => &self.night,
        }
    }
}

/// Allowed reminder hours per period, inclusive.
fn reminder_window(period: TimePeriod) -> (u32, u32) {
    match period {
        TimePeriod::Morning => (6, 11),
        TimePeriod::Day => (12, 16),
        TimePeriod::Evening => (17, 20),
        TimePeriod::Night => (21, 23),
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(invalid("cannot set a whole section".into()));
                    }
                    _ => serde_json::Value::String(value.into()),
                };
                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from the data directory, writing defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults there if it is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config =
                    toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                tracing::info!(path = %path.display(), "wrote default configuration");
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default configuration");
            Self::default()
        })
    }

    /// Persist to the data directory.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key, in memory only.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit the
    /// field (wrong type, pattern/duration outside the fixed set, reminder
    /// time outside its period).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = Self::canonical_value(key, value)?;
        let mut json = serde_json::to_value(&*self)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, &value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Pattern and duration accept the same spellings as the command line
    /// (`box`, `4-7-8`, `3m`) and are stored in their canonical form.
    fn canonical_value(key: &str, value: &str) -> Result<String, ConfigError> {
        let invalid = |e: ValidationError| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        };
        match key {
            "breathing.pattern" => Ok(value
                .parse::<BreathingPattern>()
                .map_err(invalid)?
                .id()
                .to_string()),
            "breathing.duration" => Ok(value
                .parse::<SessionDuration>()
                .map_err(invalid)?
                .secs()
                .to_string()),
            _ => Ok(value.to_string()),
        }
    }

    /// Check reminder times: each must be `HH:MM` inside its period's window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for period in TimePeriod::ALL {
            let reminder = self.reminders.for_period(period);
            let key = format!("reminders.{}.time", period.as_str());
            let time = NaiveTime::parse_from_str(&reminder.time, "%H:%M").map_err(|_| {
                ConfigError::InvalidValue {
                    key: key.clone(),
                    message: format!("'{}' is not an HH:MM time", reminder.time),
                }
            })?;
            let (first, last) = reminder_window(period);
            if !(first..=last).contains(&time.hour()) {
                return Err(ConfigError::InvalidValue {
                    key,
                    message: format!(
                        "{} reminders must be between {first:02}:00 and {last:02}:59",
                        period.as_str()
                    ),
                });
            }
        }
        Ok(())
    }
}
