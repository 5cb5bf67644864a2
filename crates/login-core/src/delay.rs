//! Simulated Network Delay
//!
//! The artificial wait that stands in for a server round trip, plus the
//! abort flag a form trips when it unmounts mid-wait.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::AuthResult;

/// Non-blocking wait.
///
/// Futures are `?Send`: browser timers live on the single UI thread.
#[async_trait(?Send)]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration) -> AuthResult<()>;
}

/// Resolves at once. Used by tests and when the delay is configured to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

#[async_trait(?Send)]
impl Delay for Immediate {
    async fn wait(&self, _duration: Duration) -> AuthResult<()> {
        Ok(())
    }
}

/// Shared flag telling an in-flight attempt its owner is gone
#[derive(Debug, Clone, Default)]
pub struct AbortHandle {
    aborted: Arc<AtomicBool>,
}

impl AbortHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort(&self) {
        self.aborted.store(true, Ordering::SeqCst);
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_is_shared_between_clones() {
        let handle = AbortHandle::new();
        let observer = handle.clone();
        assert!(!observer.is_aborted());
        handle.abort();
        assert!(observer.is_aborted());
    }

    #[test]
    fn test_immediate_resolves() {
        let result = futures::executor::block_on(Immediate.wait(Duration::from_secs(60)));
        assert!(result.is_ok());
    }
}
