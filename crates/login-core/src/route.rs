//! Routes and the Session Guard

use crate::domain::Session;
use crate::session::{read_session, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
        }
    }
}

/// Result of checking the session on a protected page mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render(Session),
    Redirect(Route),
}

/// Read the session once; no session means go to login.
pub fn guard_dashboard(store: &dyn SessionStore) -> GuardDecision {
    match read_session(store) {
        Some(session) => GuardDecision::Render(session),
        None => {
            log::info!("[GUARD] No session, redirecting to {}", Route::Login.path());
            GuardDecision::Redirect(Route::Login)
        }
    }
}

/// Clear the session and return where to go next.
///
/// Always lands on login, even if the store failed to clear.
pub fn logout(store: &dyn SessionStore) -> Route {
    match store.clear() {
        Ok(()) => log::info!("[SESSION] Logged out"),
        Err(e) => log::error!("[SESSION] Logout could not clear session: {}", e),
    }
    Route::Login
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::Register.path(), "/register");
        assert_eq!(Route::Dashboard.path(), "/dashboard");
    }

    #[test]
    fn test_guard_without_session_redirects() {
        let store = MemorySessionStore::in_memory("user");
        assert_eq!(guard_dashboard(&store), GuardDecision::Redirect(Route::Login));
    }

    #[test]
    fn test_guard_with_session_renders() {
        let store = MemorySessionStore::in_memory("user");
        let session = Session { first_name: "Ayush".into(), last_name: "Kumar".into() };
        store.save(&session).unwrap();
        assert_eq!(guard_dashboard(&store), GuardDecision::Render(session));
    }

    #[test]
    fn test_logout_then_guard_redirects() {
        let store = MemorySessionStore::in_memory("user");
        store
            .save(&Session { first_name: "A".into(), last_name: "B".into() })
            .unwrap();

        assert_eq!(logout(&store), Route::Login);
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(guard_dashboard(&store), GuardDecision::Redirect(Route::Login));
    }
}
