//! Registration Flow
//!
//! Mock registration: waits, then always reports success. The entered
//! details are not stored anywhere, so a new account cannot log in; only the
//! built-in mock credential works.

use std::sync::Arc;
use std::time::Duration;

use crate::delay::{AbortHandle, Delay};
use crate::error::{AuthError, AuthResult};
use crate::form::{mask_mobile, RegisterForm};
use crate::latch::{SubmitGuard, SubmitLatch};
use crate::notice::{FlowKind, Notice};
use crate::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterOutcome {
    pub notice: Notice,
    pub redirect: Route,
}

#[derive(Clone)]
pub struct RegisterFlow {
    delay: Arc<dyn Delay>,
    wait_for: Duration,
    latch: SubmitLatch,
    abort: AbortHandle,
}

impl RegisterFlow {
    pub fn new(delay: Arc<dyn Delay>, wait_for: Duration) -> Self {
        Self {
            delay,
            wait_for,
            latch: SubmitLatch::new(),
            abort: AbortHandle::new(),
        }
    }

    pub fn begin(&self) -> Option<SubmitGuard> {
        self.latch.try_begin()
    }

    pub fn abort_handle(&self) -> AbortHandle {
        self.abort.clone()
    }

    pub async fn submit(&self, _guard: SubmitGuard, form: RegisterForm) -> AuthResult<RegisterOutcome> {
        log::info!("[REGISTER] Registering {}", mask_mobile(&form.mobile));

        self.delay.wait(self.wait_for).await?;
        if self.abort.is_aborted() {
            return Err(AuthError::Aborted);
        }

        // Discarded on purpose: there is no account store to write to.
        drop(form);

        Ok(RegisterOutcome {
            notice: FlowKind::Register.success_notice(),
            redirect: Route::Login,
        })
    }
}
