//! Posts API data transfer objects
//!
//! These types mirror the wire format of the posts endpoint. They double as
//! the domain model for the demo applications; the shapes are identical, so
//! a separate domain layer would only duplicate fields.

use serde::{Deserialize, Serialize};

/// A post as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Id of the user who authored the post (0 for locally created rows)
    #[serde(rename = "userId")]
    pub user_id: u64,

    /// Post id, unique within the collection
    pub id: u64,

    /// Post title
    pub title: String,

    /// Post body text
    pub body: String,
}

impl Post {
    /// Create a locally-authored post
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            user_id: 0,
            id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Attach an author id
    pub fn with_user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }
}
