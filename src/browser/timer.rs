//! Timer-backed Delay

use std::time::Duration;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use login_core::{AuthError, AuthResult, Delay};

/// `setTimeout` wrapped as a future
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerDelay;

#[async_trait(?Send)]
impl Delay for TimerDelay {
    async fn wait(&self, duration: Duration) -> AuthResult<()> {
        let millis = u32::try_from(duration.as_millis())
            .map_err(|_| AuthError::SimulatedFailure(format!("delay too long: {:?}", duration)))?;
        TimeoutFuture::new(millis).await;
        Ok(())
    }
}
