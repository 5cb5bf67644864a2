//! Application Context
//!
//! Shared services and notification helpers provided via Leptos Context API.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use login_core::{AppConfig, Notice, Services, SessionStore};

use crate::store::{store_dismiss_toast, store_push_toast, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Injected flow dependencies
    services: StoredValue<Services>,
    /// Toast queue
    store: AppStore,
}

impl AppContext {
    pub fn new(services: Services, store: AppStore) -> Self {
        Self {
            services: StoredValue::new(services),
            store,
        }
    }

    pub fn services(&self) -> Services {
        self.services.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.services.with_value(|s| s.config.clone())
    }

    pub fn sessions(&self) -> Arc<dyn SessionStore> {
        self.services.with_value(|s| s.sessions.clone())
    }

    /// Show a toast that dismisses itself after the configured timeout
    pub fn notify(&self, notice: Notice) {
        let config = self.config();
        log::debug!("[TOAST] {}: {}", notice.level.as_str(), notice.message);
        let id = store_push_toast(&self.store, notice, config.max_toasts);

        let store = self.store;
        let millis = u32::try_from(config.toast_timeout().as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            store_dismiss_toast(&store, id);
        });
    }

    pub fn dismiss(&self, toast_id: u32) {
        store_dismiss_toast(&self.store, toast_id);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
