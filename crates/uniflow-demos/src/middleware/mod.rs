//! Middleware module
//!
//! Side-effect middleware for the demo stores.

pub mod fetch_middleware;

pub use fetch_middleware::FetchMiddleware;
