//! Dispatcher for middleware and task action dispatch
//!
//! When middleware or a spawned task needs to dispatch actions that should
//! re-enter the middleware chain, it uses the Dispatcher. Actions dispatched
//! via Dispatcher land in the store's action queue and go back through the
//! full pipeline (middleware chain, reducer, subscribers).
//!
//! This enables patterns like:
//! - a fetch-start action triggers a background task
//! - the task dispatches a success or failure action when the call settles

use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;

/// Dispatcher for sending actions into a store's queue
///
/// Actions dispatched here re-enter the pipeline from the beginning, so
/// every middleware can observe and react to them. The handle is cheap to
/// clone and may be moved into spawned tasks or other threads.
pub struct Dispatcher<A: Action> {
    action_tx: UnboundedSender<A>,
}

impl<A: Action> Dispatcher<A> {
    /// Create a dispatcher over the store's action channel
    pub(crate) fn new(action_tx: UnboundedSender<A>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed through the full pipeline
    ///
    /// The action is queued; it commits when the owning store drains the
    /// queue (synchronously at the end of the current dispatch, or when the
    /// owner pumps `process_next`).
    pub fn dispatch(&self, action: A) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}

impl<A: Action> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            action_tx: self.action_tx.clone(),
        }
    }
}
