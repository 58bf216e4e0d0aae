//! Counter reducer
//!
//! Handles counter state updates.

use crate::actions::CounterAction;
use crate::state::CounterState;

/// Reduce counter state
pub fn reduce_counter(mut state: CounterState, action: &CounterAction) -> CounterState {
    match action {
        CounterAction::Increment => {
            state.count += 1;
        }
        CounterAction::Decrement => {
            state.count -= 1;
        }
        CounterAction::Reset => {
            state.count = 0;
        }
        CounterAction::IncrementBy(amount) => {
            state.count += amount;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniflow::Store;

    #[test]
    fn test_counter_scenario_ends_at_five() {
        let mut store = Store::new(reduce_counter);

        store.dispatch(CounterAction::Increment);
        store.dispatch(CounterAction::Increment);
        store.dispatch(CounterAction::Increment);
        store.dispatch(CounterAction::Decrement);
        store.dispatch(CounterAction::Reset);
        store.dispatch(CounterAction::IncrementBy(5));

        assert_eq!(store.state().count, 5);
    }

    #[test]
    fn test_reset_twice_equals_reset_once() {
        let counted = reduce_counter(CounterState::default(), &CounterAction::IncrementBy(9));

        let once = reduce_counter(counted, &CounterAction::Reset);
        let twice = reduce_counter(once, &CounterAction::Reset);

        assert_eq!(once, twice);
        assert_eq!(twice.count, 0);
    }

    #[test]
    fn test_decrement_goes_below_zero() {
        let state = reduce_counter(CounterState::default(), &CounterAction::Decrement);

        assert_eq!(state.count, -1);
    }

    #[test]
    fn test_replaying_a_sequence_is_deterministic() {
        let sequence = [
            CounterAction::IncrementBy(3),
            CounterAction::Decrement,
            CounterAction::Increment,
        ];

        let first = sequence
            .iter()
            .fold(CounterState::default(), reduce_counter);
        let second = sequence
            .iter()
            .fold(CounterState::default(), reduce_counter);

        assert_eq!(first, second);
        assert_eq!(first.count, 3);
    }
}
