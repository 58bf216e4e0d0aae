//! Base trait for actions dispatched through a [`Store`](crate::Store).

use std::fmt::Debug;

/// Marker trait for action values.
///
/// Actions represent:
/// - User intents (increment a counter, delete a record)
/// - Completion events (an external call succeeded or failed)
///
/// Each application declares one closed enum per store, one variant per
/// discriminant with its payload typed in the variant. Actions are consumed
/// exactly once by the dispatch pipeline and handed back to the caller.
///
/// `Debug` lets the logging middleware print every action; `Clone` lets
/// middleware re-dispatch an action it consumed.
pub trait Action: Clone + Debug + Send + 'static {}
