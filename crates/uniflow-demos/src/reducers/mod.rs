//! Reducers module
//!
//! One pure reducer per demo store.

pub mod counter_reducer;
pub mod posts_reducer;

pub use counter_reducer::reduce_counter;
pub use posts_reducer::reduce_posts;
