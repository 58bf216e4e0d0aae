//! Posts reducer
//!
//! Handles local CRUD updates and the remote fetch lifecycle for the posts
//! collection.

use posts_client::Post;

use crate::actions::{PostPatch, PostsAction};
use crate::state::{LoadingState, PostsState};

/// Merge a patch into a post, keeping fields the patch leaves out
fn apply_patch(post: &mut Post, patch: &PostPatch) {
    if let Some(title) = &patch.title {
        post.title = title.clone();
    }
    if let Some(body) = &patch.body {
        post.body = body.clone();
    }
}

/// Reduce posts state
pub fn reduce_posts(mut state: PostsState, action: &PostsAction) -> PostsState {
    match action {
        PostsAction::Created(post) => {
            state.posts.push(post.clone());
        }

        PostsAction::Updated { id, patch } => {
            if let Some(post) = state.posts.iter_mut().find(|post| post.id == *id) {
                apply_patch(post, patch);
            } else {
                log::warn!("Updated: no post with id {}", id);
            }
        }

        PostsAction::Deleted { id } => {
            state.posts.retain(|post| post.id != *id);
        }

        PostsAction::FetchStarted => {
            log::debug!("Posts fetch started");
            state.loading_state = LoadingState::Loading;
        }

        PostsAction::FetchSucceeded { posts, fetched_at } => {
            log::debug!("Posts fetch succeeded with {} posts", posts.len());
            state.posts = posts.clone();
            state.loading_state = LoadingState::Loaded;
            state.last_updated = Some(*fetched_at);
        }

        PostsAction::FetchFailed { error } => {
            log::warn!("Posts fetch failed: {}", error);
            // Previously fetched posts stay visible alongside the error
            state.loading_state = LoadingState::Error(error.clone());
        }
    }
    state
}
