//! Unidirectional state container
//!
//! This crate provides a typed store that holds application state and only
//! changes it through pure transition functions. Actions describe intended
//! transitions; middleware intercepts them before the reducer; subscribers
//! observe every committed transition. Asynchronous side effects run as
//! spawned tasks that feed completion actions back through a channel, so
//! exactly one state transition commits at a time.
//!
//! # Architecture
//!
//! ```text
//!          dispatch(action)
//!                │
//!                ▼
//! ┌──────────────────────────────┐
//! │       Middleware chain       │──► consume, or spawn a task that
//! │  (installation order, each   │    dispatches completions later
//! │   link continues or stops)   │
//! └──────────────────────────────┘
//!                │ pass through
//!                ▼
//! ┌──────────────────────────────┐
//! │  Reducer (S, &A) -> S, pure  │
//! └──────────────────────────────┘
//!                │ commit
//!                ▼
//! ┌──────────────────────────────┐      ┌──────────────────────┐
//! │   Subscribers (in order)     │      │  Dispatcher queue    │
//! └──────────────────────────────┘      │  (drained after the  │
//!                                       │   pass, FIFO)        │
//!                                       └──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use uniflow::{Action, State, Store};
//!
//! #[derive(Debug, Clone, PartialEq, Default)]
//! struct Counter {
//!     count: i64,
//! }
//!
//! impl State for Counter {}
//!
//! #[derive(Debug, Clone)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! impl Action for CounterAction {}
//!
//! fn reduce(mut state: Counter, action: &CounterAction) -> Counter {
//!     match action {
//!         CounterAction::Increment => state.count += 1,
//!     }
//!     state
//! }
//!
//! let mut store = Store::new(reduce);
//! let _printer = store.subscribe(|state: &Counter| println!("count: {}", state.count));
//! store.dispatch(CounterAction::Increment);
//! assert_eq!(store.state().count, 1);
//! ```

pub mod action;
pub mod dispatcher;
pub mod middleware;
pub mod reducer;
pub mod state;
pub mod store;
pub mod subscription;

pub use action::Action;
pub use dispatcher::Dispatcher;
pub use middleware::logging::LoggingMiddleware;
pub use middleware::Middleware;
pub use reducer::Reducer;
pub use state::State;
pub use store::Store;
pub use subscription::Subscription;
