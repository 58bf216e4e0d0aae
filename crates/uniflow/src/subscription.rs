//! Subscription handles for store subscribers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe).
///
/// Cancelling flips a shared flag; the store skips and drops the matching
/// callback from then on. The handle is `Send`, so a subscriber registered
/// on the owning thread can be cancelled from anywhere. Dropping the handle
/// without cancelling keeps the subscription alive for the store's lifetime.
#[derive(Debug, Clone)]
pub struct Subscription {
    active: Arc<AtomicBool>,
}

impl Subscription {
    pub(crate) fn new(active: Arc<AtomicBool>) -> Self {
        Self { active }
    }

    /// Stop further notifications for the associated callback
    ///
    /// Idempotent: cancelling an already-cancelled subscription is a no-op.
    /// Cancelling while a notification pass is running only affects
    /// callbacks not yet reached in that pass.
    pub fn cancel(&self) {
        self.active.store(false, Ordering::Release);
    }

    /// Whether the associated callback will still be notified
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}
