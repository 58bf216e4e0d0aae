//! Reqwest-based posts API client
//!
//! Direct implementation of the `PostsApi` trait over HTTP. One instance
//! per base URL; the underlying connection pool is reused across calls.

use async_trait::async_trait;
use log::debug;

use crate::client::PostsApi;
use crate::error::ApiError;
use crate::types::Post;

/// Posts API client talking to a live endpoint
#[derive(Debug, Clone)]
pub struct HttpPostsApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPostsApi {
    /// Create a client for the given base URL (trailing slashes ignored)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T>(&self, url: String) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status, url });
        }

        response.json::<T>().await.map_err(ApiError::Decode)
    }
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        debug!("Fetching posts from {}", self.base_url);

        let posts: Vec<Post> = self.get_json(format!("{}/posts", self.base_url)).await?;

        debug!("Fetched {} posts", posts.len());
        Ok(posts)
    }

    async fn fetch_post(&self, id: u64) -> Result<Post, ApiError> {
        debug!("Fetching post {} from {}", id, self.base_url);

        self.get_json(format!("{}/posts/{}", self.base_url, id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slashes() {
        let client = HttpPostsApi::new("https://example.com/api///");

        assert_eq!(client.base_url(), "https://example.com/api");
    }

    #[test]
    fn test_new_keeps_clean_base_url() {
        let client = HttpPostsApi::new(crate::DEFAULT_BASE_URL);

        assert_eq!(client.base_url(), "https://jsonplaceholder.typicode.com");
    }
}
