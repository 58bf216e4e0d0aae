//! Reducer seam: the pure transition function a store is built around.

use crate::action::Action;
use crate::state::State;

/// Reducer computes the next state from the current state and an action.
///
/// The reducer is the only place where state transitions happen. It must be
/// pure: no observable side effects, no dependence on external mutable
/// state, deterministic given its inputs. For variants it does not act on it
/// returns the `state` argument unchanged.
pub trait Reducer<S: State, A: Action>: Send {
    /// Consume the current state and return the next one.
    fn reduce(&self, state: S, action: &A) -> S;
}

/// Plain functions are reducers. This is the common case: a free
/// `fn reduce(state, &action) -> state` per domain, composed by hand where
/// a state has sub-slices.
impl<S, A, F> Reducer<S, A> for F
where
    S: State,
    A: Action,
    F: Fn(S, &A) -> S + Send,
{
    fn reduce(&self, state: S, action: &A) -> S {
        self(state, action)
    }
}
