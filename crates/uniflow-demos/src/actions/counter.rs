//! Counter demo actions

use uniflow::Action;

/// Actions for the counter demo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    /// Add one to the count
    Increment,
    /// Subtract one from the count
    Decrement,
    /// Put the count back to zero
    Reset,
    /// Add an arbitrary amount to the count
    IncrementBy(i64),
}

impl Action for CounterAction {}
