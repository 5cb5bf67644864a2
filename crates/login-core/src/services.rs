//! Injected Dependencies
//!
//! Everything the flows reach outside themselves for, bundled so the UI can
//! provide one value through context and tests can swap in fakes.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::credentials::{CredentialVerifier, MockCredentials};
use crate::delay::{Delay, Immediate};
use crate::greeting::{Clock, LocalClock};
use crate::login::LoginFlow;
use crate::register::RegisterFlow;
use crate::session::{MemorySessionStore, SessionStore};

#[derive(Clone)]
pub struct Services {
    pub config: AppConfig,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub sessions: Arc<dyn SessionStore>,
    pub delay: Arc<dyn Delay>,
    pub clock: Arc<dyn Clock>,
}

impl Services {
    /// Mock credentials, in-memory session, no delay, local clock
    pub fn in_memory(config: AppConfig) -> Self {
        let sessions = MemorySessionStore::in_memory(config.session_key.clone());
        Self {
            config,
            verifier: Arc::new(MockCredentials::default()),
            sessions: Arc::new(sessions),
            delay: Arc::new(Immediate),
            clock: Arc::new(LocalClock),
        }
    }

    /// Swap the session store, e.g. for localStorage in the browser
    pub fn with_sessions(mut self, sessions: Arc<dyn SessionStore>) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn with_delay(mut self, delay: Arc<dyn Delay>) -> Self {
        self.delay = delay;
        self
    }

    /// Fresh flow for one mounted login form
    pub fn login_flow(&self) -> LoginFlow {
        LoginFlow::new(
            self.verifier.clone(),
            self.sessions.clone(),
            self.delay.clone(),
            self.config.simulated_delay(),
        )
    }

    /// Fresh flow for one mounted register form
    pub fn register_flow(&self) -> RegisterFlow {
        RegisterFlow::new(self.delay.clone(), self.config.simulated_delay())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    use crate::form::LoginForm;
    use crate::greeting::{greeting_now, FixedClock};
    use crate::route::{guard_dashboard, logout, GuardDecision, Route};

    #[test]
    fn test_full_round_trip() {
        let mut services = Services::in_memory(AppConfig::default());
        services.clock = Arc::new(FixedClock(9));

        // Dashboard before login
        assert_eq!(
            guard_dashboard(services.sessions.as_ref()),
            GuardDecision::Redirect(Route::Login)
        );

        let flow = services.login_flow();
        let guard = flow.begin().unwrap();
        let outcome = block_on(flow.submit(guard, LoginForm::new("1234567890", "password123"))).unwrap();
        assert_eq!(outcome.redirect, Route::Dashboard);

        let GuardDecision::Render(session) = guard_dashboard(services.sessions.as_ref()) else {
            panic!("expected a session after login");
        };
        assert_eq!(
            greeting_now(&session, services.clock.as_ref()),
            "Welcome Ayush Kumar, Good Morning"
        );

        assert_eq!(logout(services.sessions.as_ref()), Route::Login);
        assert_eq!(
            guard_dashboard(services.sessions.as_ref()),
            GuardDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_overrides_reach_the_flows() {
        use crate::error::{AuthError, AuthResult};
        use async_trait::async_trait;
        use std::time::Duration;

        struct Stalled;

        #[async_trait(?Send)]
        impl Delay for Stalled {
            async fn wait(&self, _duration: Duration) -> AuthResult<()> {
                Err(AuthError::SimulatedFailure("stalled".into()))
            }
        }

        let shared = Arc::new(MemorySessionStore::in_memory("shared"));
        let services = Services::in_memory(AppConfig::default()).with_sessions(shared.clone());

        let flow = services.login_flow();
        let guard = flow.begin().unwrap();
        block_on(flow.submit(guard, LoginForm::new("1234567890", "password123"))).unwrap();
        assert!(shared.load().unwrap().is_some());

        let stalled = services.with_delay(Arc::new(Stalled));
        let flow = stalled.register_flow();
        let guard = flow.begin().unwrap();
        let result = block_on(flow.submit(guard, Default::default()));
        assert_eq!(result, Err(AuthError::SimulatedFailure("stalled".into())));
    }

    #[test]
    fn test_each_form_gets_its_own_latch() {
        let services = Services::in_memory(AppConfig::default());
        let first = services.login_flow();
        let second = services.login_flow();

        let _held = first.begin().unwrap();
        assert!(second.begin().is_some());
    }
}
