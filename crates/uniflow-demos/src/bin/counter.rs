//! Counter demo
//!
//! Replays the scripted counter sequence against a store and logs every
//! committed state on the way.

use uniflow::Store;
use uniflow_demos::actions::CounterAction;
use uniflow_demos::logger;
use uniflow_demos::reducers::reduce_counter;
use uniflow_demos::state::CounterState;

fn main() {
    logger::init();

    let mut store = Store::new(reduce_counter);

    let _subscription = store.subscribe(|state: &CounterState| {
        log::info!("state: {:?}", state);
    });

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Decrement);
    store.dispatch(CounterAction::Reset);
    store.dispatch(CounterAction::IncrementBy(5));

    println!("final count: {}", store.state().count);
}
