//! Browser Bindings
//!
//! web-sys and gloo implementations of the injectable services.

mod config;
mod storage;
mod timer;

pub use config::load_config;

use std::sync::Arc;

use login_core::{AppConfig, Services};

use storage::{BrowserSessionStore, LocalStorage};
use timer::TimerDelay;

/// Services wired to localStorage and browser timers
pub fn browser_services(config: AppConfig) -> Services {
    let sessions = BrowserSessionStore::new(LocalStorage, config.session_key.clone());
    Services::in_memory(config)
        .with_sessions(Arc::new(sessions))
        .with_delay(Arc::new(TimerDelay))
}
