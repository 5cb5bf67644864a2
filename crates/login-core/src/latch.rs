//! Submit Latch
//!
//! At most one in-flight submission per form. The guard releases the latch
//! on drop, so an error path or an aborted attempt frees it too.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct SubmitLatch {
    busy: Arc<AtomicBool>,
}

impl SubmitLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` while another submission holds the latch
    pub fn try_begin(&self) -> Option<SubmitGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| SubmitGuard { busy: self.busy.clone() })
    }
}

#[derive(Debug)]
pub struct SubmitGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_is_rejected() {
        let latch = SubmitLatch::new();
        let guard = latch.try_begin();
        assert!(guard.is_some());
        assert!(latch.try_begin().is_none());
        assert!(latch.clone().try_begin().is_none());

        drop(guard);
        assert!(latch.try_begin().is_some());
    }
}
