//! Actions module
//!
//! One closed action enum per demo store. Callers construct actions through
//! the variants and the helper constructors, keeping the discriminant space
//! closed and enumerable.

pub mod counter;
pub mod posts;

// Re-export all action types for convenience
pub use counter::CounterAction;
pub use posts::{PostPatch, PostsAction};
