//! Login Flow
//!
//! Waits out the simulated round trip, checks the pair against the
//! credential lookup, and persists the session on a match.

use std::sync::Arc;
use std::time::Duration;

use crate::credentials::CredentialVerifier;
use crate::delay::{AbortHandle, Delay};
use crate::domain::Session;
use crate::error::{AuthError, AuthResult};
use crate::form::{mask_mobile, LoginForm};
use crate::latch::{SubmitGuard, SubmitLatch};
use crate::notice::{FlowKind, Notice};
use crate::route::Route;
use crate::session::SessionStore;

/// Successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub session: Session,
    pub notice: Notice,
    pub redirect: Route,
}

/// One login form's worth of flow state.
///
/// Clones share the latch and abort flag, so a clone can be moved into the
/// async task while the form keeps its own handle.
#[derive(Clone)]
pub struct LoginFlow {
    verifier: Arc<dyn CredentialVerifier>,
    sessions: Arc<dyn SessionStore>,
    delay: Arc<dyn Delay>,
    wait_for: Duration,
    latch: SubmitLatch,
    abort: AbortHandle,
}

impl LoginFlow {
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        sessions: Arc<dyn SessionStore>,
        delay: Arc<dyn Delay>,
        wait_for: Duration,
    ) -> Self {
        Self {
            verifier,
            sessions,
            delay,
            wait_for,
            latch: SubmitLatch::new(),
            abort: AbortHandle::new(),
        }
    }

    /// Claim the form for one submission, `None` if one is already running
    pub fn begin(&self) -> Option<SubmitGuard> {
        self.latch.try_begin()
    }

    /// Handle the form trips from its cleanup hook on unmount
    pub fn abort_handle(&self) -> AbortHandle {
        self.abort.clone()
    }

    pub async fn submit(&self, _guard: SubmitGuard, form: LoginForm) -> AuthResult<LoginOutcome> {
        log::info!("[LOGIN] Checking credentials for {}", mask_mobile(&form.mobile));

        self.delay.wait(self.wait_for).await?;
        if self.abort.is_aborted() {
            log::debug!("[LOGIN] Form unmounted during check, dropping result");
            return Err(AuthError::Aborted);
        }

        let Some(identity) = self.verifier.verify(&form.mobile, &form.password) else {
            log::warn!("[LOGIN] Invalid credentials for {}", mask_mobile(&form.mobile));
            return Err(AuthError::InvalidCredentials);
        };

        let session = Session::from(identity);
        self.sessions.save(&session)?;
        log::info!("[LOGIN] Logged in as {}", session.full_name());

        Ok(LoginOutcome {
            session,
            notice: FlowKind::Login.success_notice(),
            redirect: Route::Dashboard,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;

    use crate::credentials::MockCredentials;
    use crate::delay::Immediate;
    use crate::notice::NoticeLevel;
    use crate::session::MemorySessionStore;

    fn setup(delay: Arc<dyn Delay>) -> (LoginFlow, Arc<MemorySessionStore>) {
        let store = Arc::new(MemorySessionStore::in_memory("user"));
        let flow = LoginFlow::new(
            Arc::new(MockCredentials::default()),
            store.clone(),
            delay,
            Duration::from_secs(1),
        );
        (flow, store)
    }

    fn run(flow: &LoginFlow, mobile: &str, password: &str) -> AuthResult<LoginOutcome> {
        let guard = flow.begin().expect("latch should be free");
        block_on(flow.submit(guard, LoginForm::new(mobile, password)))
    }

    /// Trips the abort flag while "waiting", like a form unmounting mid-delay
    struct UnmountDuringWait(AbortHandle);

    #[async_trait(?Send)]
    impl Delay for UnmountDuringWait {
        async fn wait(&self, _duration: Duration) -> AuthResult<()> {
            self.0.abort();
            Ok(())
        }
    }

    struct FailingDelay;

    #[async_trait(?Send)]
    impl Delay for FailingDelay {
        async fn wait(&self, _duration: Duration) -> AuthResult<()> {
            Err(AuthError::SimulatedFailure("timer dropped".into()))
        }
    }

    #[test]
    fn test_mock_credential_logs_in() {
        let (flow, store) = setup(Arc::new(Immediate));

        let outcome = run(&flow, "1234567890", "password123").unwrap();

        let expected = Session { first_name: "Ayush".into(), last_name: "Kumar".into() };
        assert_eq!(outcome.session, expected);
        assert_eq!(outcome.redirect, Route::Dashboard);
        assert_eq!(outcome.notice.level, NoticeLevel::Success);
        assert_eq!(outcome.notice.message, "Login successful!");
        assert_eq!(store.load().unwrap(), Some(expected));
    }

    #[test]
    fn test_wrong_pairs_leave_session_unset() {
        let (flow, store) = setup(Arc::new(Immediate));

        for (mobile, password) in [
            ("1234567890", "wrong"),
            ("0987654321", "password123"),
            ("1234567890", "PASSWORD123"),
        ] {
            assert_eq!(run(&flow, mobile, password), Err(AuthError::InvalidCredentials));
            assert_eq!(store.load().unwrap(), None);
        }
    }

    #[test]
    fn test_second_submit_rejected_while_in_flight() {
        let (flow, _store) = setup(Arc::new(Immediate));

        let guard = flow.begin().unwrap();
        assert!(flow.begin().is_none());
        assert!(flow.clone().begin().is_none());

        let _ = block_on(flow.submit(guard, LoginForm::new("1", "2")));
        assert!(flow.begin().is_some());
    }

    #[test]
    fn test_latch_released_after_failure() {
        let (flow, store) = setup(Arc::new(FailingDelay));

        let result = run(&flow, "1234567890", "password123");
        assert!(matches!(result, Err(AuthError::SimulatedFailure(_))));
        assert!(flow.begin().is_some());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_storage_failure_is_simulated_failure() {
        use crate::error::StoreError;
        use crate::session::{KeyedSessionStore, StorageBackend};

        struct NoStorage;

        impl StorageBackend for NoStorage {
            fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
                Ok(None)
            }
            fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
                Err(StoreError::Write("quota exceeded".into()))
            }
            fn remove_item(&self, _key: &str) -> Result<(), StoreError> {
                Ok(())
            }
        }

        let flow = LoginFlow::new(
            Arc::new(MockCredentials::default()),
            Arc::new(KeyedSessionStore::new(NoStorage, "user")),
            Arc::new(Immediate),
            Duration::ZERO,
        );

        let err = run(&flow, "1234567890", "password123").unwrap_err();
        assert_eq!(err, AuthError::SimulatedFailure("storage write failed: quota exceeded".into()));
        assert_eq!(
            err.notice(FlowKind::Login).unwrap().message,
            "Login failed. Please try again."
        );
    }

    #[test]
    fn test_unmount_during_wait_writes_nothing() {
        let store = Arc::new(MemorySessionStore::in_memory("user"));
        let mut flow = LoginFlow::new(
            Arc::new(MockCredentials::default()),
            store.clone(),
            Arc::new(Immediate),
            Duration::from_secs(1),
        );
        flow.delay = Arc::new(UnmountDuringWait(flow.abort_handle()));

        assert_eq!(run(&flow, "1234567890", "password123"), Err(AuthError::Aborted));
        assert_eq!(store.load().unwrap(), None);
    }
}
