//! Posts demo actions
//!
//! Local CRUD actions plus the remote fetch lifecycle. The fetch actions
//! carry everything the reducer needs, so the reducer stays pure: the
//! success timestamp is stamped where the call completes, not in the
//! reducer.

use chrono::{DateTime, Local};
use posts_client::Post;
use uniflow::Action;

/// Patch applied to an existing post; `None` fields keep the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl PostPatch {
    /// Patch only the title
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: None,
        }
    }

    /// Patch only the body
    pub fn body(body: impl Into<String>) -> Self {
        Self {
            title: None,
            body: Some(body.into()),
        }
    }
}

/// Actions for the posts demos
#[derive(Debug, Clone, PartialEq)]
pub enum PostsAction {
    // Local CRUD
    /// Append a post to the collection
    Created(Post),
    /// Merge a patch into the post with the given id
    Updated { id: u64, patch: PostPatch },
    /// Remove the post with the given id
    Deleted { id: u64 },

    // Remote fetch lifecycle
    /// Start fetching the collection from the API
    FetchStarted,
    /// The fetch returned the full collection (posts, completion time)
    FetchSucceeded {
        posts: Vec<Post>,
        fetched_at: DateTime<Local>,
    },
    /// The fetch failed with an error descriptor
    FetchFailed { error: String },
}

impl PostsAction {
    /// Create-a-post action from raw fields
    pub fn created(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Created(Post::new(id, title, body))
    }

    /// Update-a-post action
    pub fn updated(id: u64, patch: PostPatch) -> Self {
        Self::Updated { id, patch }
    }

    /// Failure action from anything error-shaped
    pub fn fetch_failed(error: impl Into<String>) -> Self {
        Self::FetchFailed {
            error: error.into(),
        }
    }
}

impl Action for PostsAction {}
