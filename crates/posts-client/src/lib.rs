//! HTTP client for a jsonplaceholder-style posts API
//!
//! This crate provides a trait-based client for the read side of a posts
//! REST endpoint. Consumers hold a `dyn PostsApi`, so the network edge can
//! be swapped for a mock in tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use posts_client::{HttpPostsApi, PostsApi, DEFAULT_BASE_URL};
//!
//! # async fn example() -> Result<(), posts_client::ApiError> {
//! let client = HttpPostsApi::new(DEFAULT_BASE_URL);
//!
//! let posts = client.fetch_posts().await?;
//! let first = client.fetch_post(1).await?;
//! assert_eq!(posts[0].id, first.id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod types;

/// Default API host (the public jsonplaceholder instance)
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

pub use client::PostsApi;
pub use error::ApiError;
pub use http::HttpPostsApi;
pub use types::Post;

// Re-export reqwest so consumers can name status codes without adding
// it as a direct dependency
pub use reqwest;
