//! Posts API client trait
//!
//! Consumers depend on this trait rather than a concrete client, so tests
//! can substitute a mock and the store layer stays decoupled from
//! networking.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::Post;

/// Read access to a posts API
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// Fetch the full posts collection
    ///
    /// # Returns
    ///
    /// All posts known to the API, in server order, or an [`ApiError`]
    /// describing why the call failed.
    async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// Fetch a single post by id
    async fn fetch_post(&self, id: u64) -> Result<Post, ApiError>;
}
