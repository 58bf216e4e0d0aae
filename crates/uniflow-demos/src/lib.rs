//! Demo domains for the uniflow store
//!
//! Shared state, actions, reducers and middleware used by the three
//! demonstration binaries:
//!
//! - `counter`: scripted counter sequence against a plain store
//! - `posts`: scripted create/update/delete sequence
//! - `api_posts`: asynchronous fetch through middleware and a live API

pub mod actions;
pub mod logger;
pub mod middleware;
pub mod reducers;
pub mod state;
