use crate::action::Action;
use crate::dispatcher::Dispatcher;
use crate::state::State;

pub mod logging;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware links run in installation order. A link that performs side
/// effects (API calls, timers) spawns them as tasks and feeds the results
/// back through the [`Dispatcher`]; the store itself never blocks on them.
pub trait Middleware<S: State, A: Action>: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter the chain
    ///
    /// Returns `true` to continue the chain, `false` to consume the action.
    /// A consumed action never reaches the reducer or the subscribers. A
    /// link that wants to rewrite an action consumes it and dispatches the
    /// replacement.
    fn handle(&mut self, action: &A, state: &S, dispatcher: &Dispatcher<A>) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Flag {
        set: bool,
    }

    impl State for Flag {}

    #[derive(Debug, Clone, PartialEq)]
    enum FlagAction {
        Set,
        Clear,
    }

    impl Action for FlagAction {}

    fn reduce_flag(state: Flag, action: &FlagAction) -> Flag {
        match action {
            FlagAction::Set => Flag { set: true },
            FlagAction::Clear => Flag { set: false },
        }
    }

    /// Consumes `Clear`, passes everything else through.
    struct KeepSetMiddleware;

    impl Middleware<Flag, FlagAction> for KeepSetMiddleware {
        fn handle(
            &mut self,
            action: &FlagAction,
            _state: &Flag,
            _dispatcher: &Dispatcher<FlagAction>,
        ) -> bool {
            !matches!(action, FlagAction::Clear)
        }
    }

    #[test]
    fn test_middleware_consumes_action() {
        let mut store = Store::new(reduce_flag);
        store.add_middleware(Box::new(KeepSetMiddleware));

        store.dispatch(FlagAction::Set);
        assert!(store.state().set);

        store.dispatch(FlagAction::Clear);
        assert!(store.state().set);
    }

    /// Records every action it sees.
    struct Recorder {
        seen: Arc<Mutex<Vec<FlagAction>>>,
    }

    impl Middleware<Flag, FlagAction> for Recorder {
        fn handle(
            &mut self,
            action: &FlagAction,
            _state: &Flag,
            _dispatcher: &Dispatcher<FlagAction>,
        ) -> bool {
            self.seen.lock().unwrap().push(action.clone());
            true
        }
    }

    #[test]
    fn test_consumed_action_never_reaches_later_links() {
        let seen = Arc::new(Mutex::new(Vec::new()));

        let mut store = Store::new(reduce_flag);
        store.add_middleware(Box::new(KeepSetMiddleware));
        store.add_middleware(Box::new(Recorder {
            seen: Arc::clone(&seen),
        }));

        store.dispatch(FlagAction::Clear);
        store.dispatch(FlagAction::Set);

        assert_eq!(*seen.lock().unwrap(), vec![FlagAction::Set]);
    }

    /// Rewrites `Clear` into `Set` via the dispatcher.
    struct RewriteMiddleware;

    impl Middleware<Flag, FlagAction> for RewriteMiddleware {
        fn handle(
            &mut self,
            action: &FlagAction,
            _state: &Flag,
            dispatcher: &Dispatcher<FlagAction>,
        ) -> bool {
            if matches!(action, FlagAction::Clear) {
                dispatcher.dispatch(FlagAction::Set);
                return false;
            }
            true
        }
    }

    #[test]
    fn test_middleware_rewrites_action_through_dispatcher() {
        let mut store = Store::new(reduce_flag);
        store.add_middleware(Box::new(RewriteMiddleware));

        store.dispatch(FlagAction::Clear);
        assert!(store.state().set);
    }
}
