use serde::Serialize;
use uniflow::State;

/// State for the counter demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CounterState {
    /// Current tally
    pub count: i64,
}

impl State for CounterState {}
