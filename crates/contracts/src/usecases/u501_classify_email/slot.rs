use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Single-slot guard for the one in-flight classification.
///
/// Clones share the slot. The slot is released when the returned
/// [`SlotGuard`] is dropped, whichever way the submission ended.
#[derive(Debug, Clone, Default)]
pub struct SubmissionSlot {
    busy: Arc<AtomicBool>,
}

impl SubmissionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` if another submission holds the slot.
    pub fn try_acquire(&self) -> Option<SlotGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SlotGuard {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

#[must_use = "the slot is released as soon as the guard is dropped"]
#[derive(Debug)]
pub struct SlotGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for SlotGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
