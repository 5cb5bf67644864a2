//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the toast
//! queue; the session is read from storage, never mirrored here.

use leptos::prelude::*;
use login_core::{Notice, NoticeLevel};
use reactive_stores::Store;

/// One visible notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: NoticeLevel,
    pub message: String,
}

/// Visible toasts, oldest first, capped at a maximum length
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastQueue {
    /// Append a toast built from `notice`, dropping the oldest beyond `max`.
    /// Returns the new toast's id.
    pub fn push(&mut self, notice: Notice, max: usize) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast { id, level: notice.level, message: notice.message });
        let overflow = self.toasts.len().saturating_sub(max.max(1));
        self.toasts.drain(..overflow);
        id
    }

    /// Remove a toast by ID. `false` if it was already gone.
    pub fn dismiss(&mut self, toast_id: u32) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != toast_id);
        self.toasts.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub toasts: ToastQueue,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_push_toast(store: &AppStore, notice: Notice, max: usize) -> u32 {
    store.toasts().write().push(notice, max)
}

/// No-op if the toast already expired or was evicted
pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().dismiss(toast_id);
}

/// Snapshot of the visible toasts (tracked)
pub fn store_toasts(store: &AppStore) -> Vec<Toast> {
    store.toasts().read().items().to_vec()
}
