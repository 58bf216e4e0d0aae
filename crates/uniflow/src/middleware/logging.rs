use std::marker::PhantomData;

use crate::action::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::State;

/// LoggingMiddleware - logs all actions passing through
///
/// Install it first so every action is logged before other links get a
/// chance to consume it. Output goes to the `log` facade at debug level;
/// binaries pick the backend.
pub struct LoggingMiddleware<S, A> {
    _marker: PhantomData<fn(S, A)>,
}

impl<S, A> LoggingMiddleware<S, A> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S, A> Default for LoggingMiddleware<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Action> Middleware<S, A> for LoggingMiddleware<S, A> {
    fn handle(&mut self, action: &A, _state: &S, _dispatcher: &Dispatcher<A>) -> bool {
        log::debug!("Action: {:?}", action);

        true // Always pass action through
    }
}
