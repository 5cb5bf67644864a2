//! App Configuration
//!
//! Tunables with built-in defaults. The UI may override them from an inline
//! JSON blob; every field is optional there.

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

/// Storage key holding the serialized session
pub const DEFAULT_SESSION_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// localStorage key for the session record
    pub session_key: String,
    /// Artificial "network" delay for login and registration
    pub simulated_delay_ms: u64,
    /// How long a toast stays up
    pub toast_timeout_ms: u64,
    /// Oldest toasts are dropped beyond this
    pub max_toasts: usize,
    /// One of error / warn / info / debug / trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_key: DEFAULT_SESSION_KEY.to_string(),
            simulated_delay_ms: 1000,
            toast_timeout_ms: 4000,
            max_toasts: 5,
            log_level: if cfg!(debug_assertions) { "debug" } else { "info" }.to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON override, keeping defaults for missing fields
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    pub fn toast_timeout(&self) -> Duration {
        Duration::from_millis(self.toast_timeout_ms)
    }

    /// Unknown level names fall back to `Info`
    pub fn level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Info)
    }
}
