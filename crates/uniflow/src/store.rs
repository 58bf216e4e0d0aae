use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;

use crate::action::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducer::Reducer;
use crate::state::State;
use crate::subscription::Subscription;

struct SubscriberEntry<S> {
    active: Arc<AtomicBool>,
    callback: Box<dyn FnMut(&S) + Send>,
}

/// Store - holds the current state and runs the dispatch loop
///
/// Every mutation goes through `&mut Store`, so at most one reducer call is
/// ever in flight. Middleware and spawned tasks feed follow-up actions into
/// an internal queue through the [`Dispatcher`]; `dispatch` drains that
/// queue synchronously before returning, and the owner pumps
/// [`process_next`](Store::process_next) for actions that arrive later.
pub struct Store<S: State, A: Action> {
    state: S,
    reducer: Box<dyn Reducer<S, A>>,
    middleware: Vec<Box<dyn Middleware<S, A>>>,
    subscribers: Vec<SubscriberEntry<S>>,
    dispatcher: Dispatcher<A>,
    action_rx: UnboundedReceiver<A>,
}

impl<S: State, A: Action> Store<S, A> {
    /// Create a store seeded with `S::default()`
    pub fn new<R>(reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Self::with_state(S::default(), reducer)
    }

    /// Create a store seeded with an explicit initial state
    pub fn with_state<R>(initial_state: S, reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            reducer: Box::new(reducer),
            middleware: Vec::new(),
            subscribers: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store
    ///
    /// The chain runs in insertion order on every dispatched action.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware<S, A>>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get the dispatcher
    ///
    /// Clone it to hand dispatch access to tasks or other threads.
    pub fn dispatcher(&self) -> &Dispatcher<A> {
        &self.dispatcher
    }

    /// Register a subscriber, called with the new state after every
    /// committed transition
    ///
    /// Subscribers run synchronously, in registration order. Registering the
    /// same callable twice yields two independent subscriptions.
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&S) + Send + 'static,
    {
        let active = Arc::new(AtomicBool::new(true));
        self.subscribers.push(SubscriberEntry {
            active: Arc::clone(&active),
            callback: Box::new(callback),
        });
        Subscription::new(active)
    }

    /// Process an action through middleware chain, reducer and subscribers
    ///
    /// Actions queued through the [`Dispatcher`] while the pass runs are
    /// processed afterwards in FIFO order, before this call returns. The
    /// original action is handed back for chaining/inspection.
    pub fn dispatch(&mut self, action: A) -> A {
        self.run(&action);
        self.drain_pending();
        action
    }

    /// Await the next action queued by a background task and run it through
    /// the full pipeline
    ///
    /// This is how an owning loop pumps completions of asynchronous work.
    /// Returns the processed action.
    pub async fn process_next(&mut self) -> A {
        let action = self
            .action_rx
            .recv()
            .await
            .expect("the store holds a sender, so the action queue never closes");
        self.run(&action);
        self.drain_pending();
        action
    }

    /// Spawn a deferred action-producing procedure
    ///
    /// The procedure receives a [`Dispatcher`] handle and a snapshot of the
    /// current state, and issues zero or more dispatches, synchronously or
    /// after suspension. It never reaches the reducer itself; the actions it
    /// dispatches commit one at a time when the owner pumps the queue.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch_thunk<F, Fut>(&self, thunk: F) -> JoinHandle<()>
    where
        F: FnOnce(Dispatcher<A>, S) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let dispatcher = self.dispatcher.clone();
        let state = self.state.clone();
        tokio::spawn(async move { thunk(dispatcher, state).await })
    }

    /// Run one action through middleware chain, reducer and subscribers
    fn run(&mut self, action: &A) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer and notify.
        // The reducer consumes a clone; the committed value is replaced only
        // when it returns.
        if should_reduce {
            self.state = self.reducer.reduce(self.state.clone(), action);
            self.notify();
        }
    }

    /// Process actions queued via the dispatcher, in FIFO order
    fn drain_pending(&mut self) {
        while let Ok(pending) = self.action_rx.try_recv() {
            self.run(&pending);
        }
    }

    /// Invoke active subscribers with the committed state
    fn notify(&mut self) {
        // Compact entries cancelled since the last pass
        self.subscribers
            .retain(|entry| entry.active.load(Ordering::Acquire));

        let state = &self.state;
        for entry in &mut self.subscribers {
            // Re-check: an earlier callback of this pass may have cancelled it
            if entry.active.load(Ordering::Acquire) {
                (entry.callback)(state);
            }
        }
    }
}
