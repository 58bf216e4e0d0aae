//! Base trait for state values held by a [`Store`](crate::Store).

/// Marker trait for state values.
///
/// States should be:
/// - Immutable (Clone to create the next state, never mutate in place)
/// - Self-contained (all data the application reads lives here)
/// - Comparable (PartialEq so tests and tooling can detect changes)
///
/// `Default` supplies the initial value when a store is built without an
/// explicit seed.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
