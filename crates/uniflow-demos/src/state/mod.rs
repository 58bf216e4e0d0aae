//! Demo state module
//!
//! Contains the state types used by the demo binaries, organized by feature.

mod counter;
mod posts;

pub use counter::CounterState;
pub use posts::{LoadingState, PostsState};
