//! Fetch middleware
//!
//! Owns the remote side of the posts fetch lifecycle. On `FetchStarted` it
//! spawns the API call and lets the action pass through, so the reducer
//! commits the loading transition before `dispatch` returns; the spawned
//! task dispatches the completion action when the call settles.

use std::sync::Arc;

use chrono::Local;
use posts_client::PostsApi;
use uniflow::{Dispatcher, Middleware};

use crate::actions::PostsAction;
use crate::state::PostsState;

/// Middleware for posts API operations
pub struct FetchMiddleware {
    client: Arc<dyn PostsApi>,
}

impl FetchMiddleware {
    /// Create a fetch middleware over the given client
    pub fn new(client: Arc<dyn PostsApi>) -> Self {
        Self { client }
    }
}

impl Middleware<PostsState, PostsAction> for FetchMiddleware {
    fn handle(
        &mut self,
        action: &PostsAction,
        state: &PostsState,
        dispatcher: &Dispatcher<PostsAction>,
    ) -> bool {
        match action {
            PostsAction::FetchStarted => {
                // One fetch at a time; a duplicate start is dropped whole
                if state.is_loading() {
                    log::debug!("FetchMiddleware: fetch already in flight, ignoring");
                    return false;
                }

                let client = Arc::clone(&self.client);
                let dispatcher = dispatcher.clone();
                tokio::spawn(async move {
                    match client.fetch_posts().await {
                        Ok(posts) => {
                            dispatcher.dispatch(PostsAction::FetchSucceeded {
                                posts,
                                fetched_at: Local::now(),
                            });
                        }
                        Err(e) => {
                            dispatcher.dispatch(PostsAction::fetch_failed(e.to_string()));
                        }
                    }
                });

                true // Let the action pass through so the reducer records Loading
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use posts_client::reqwest::StatusCode;
    use posts_client::{ApiError, Post};
    use uniflow::Store;

    use crate::reducers::reduce_posts;
    use crate::state::LoadingState;

    struct StaticPosts {
        posts: Vec<Post>,
    }

    #[async_trait]
    impl PostsApi for StaticPosts {
        async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
            Ok(self.posts.clone())
        }

        async fn fetch_post(&self, id: u64) -> Result<Post, ApiError> {
            self.posts
                .iter()
                .find(|post| post.id == id)
                .cloned()
                .ok_or_else(|| ApiError::Status {
                    status: StatusCode::NOT_FOUND,
                    url: format!("/posts/{}", id),
                })
        }
    }

    struct FailingPosts;

    #[async_trait]
    impl PostsApi for FailingPosts {
        async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
            Err(ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                url: "/posts".to_string(),
            })
        }

        async fn fetch_post(&self, _id: u64) -> Result<Post, ApiError> {
            Err(ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                url: "/posts/0".to_string(),
            })
        }
    }

    fn store_with(client: Arc<dyn PostsApi>) -> Store<PostsState, PostsAction> {
        let mut store = Store::new(reduce_posts);
        store.add_middleware(Box::new(FetchMiddleware::new(client)));
        store
    }

    #[tokio::test]
    async fn test_fetch_lifecycle_success() {
        let fetched = vec![
            Post::new(1, "Remote one", "Body").with_user_id(1),
            Post::new(2, "Remote two", "Body").with_user_id(1),
        ];
        let mut store = store_with(Arc::new(StaticPosts {
            posts: fetched.clone(),
        }));

        store.dispatch(PostsAction::FetchStarted);
        // Loading commits before dispatch returns
        assert!(store.state().is_loading());

        while !store.state().is_settled() {
            store.process_next().await;
        }

        assert_eq!(store.state().loading_state, LoadingState::Loaded);
        assert_eq!(store.state().posts, fetched);
        assert!(store.state().last_updated.is_some());
    }

    #[tokio::test]
    async fn test_fetch_lifecycle_failure_becomes_error_state() {
        let mut store = store_with(Arc::new(FailingPosts));

        store.dispatch(PostsAction::FetchStarted);
        assert!(store.state().is_loading());

        while !store.state().is_settled() {
            store.process_next().await;
        }

        assert!(!store.state().is_loading());
        let error = store.state().error().unwrap_or_default();
        assert!(error.contains("500"), "unexpected descriptor: {}", error);
        assert!(store.state().posts.is_empty());
        assert!(store.state().last_updated.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_fetch_start_is_consumed_while_loading() {
        let mut middleware = FetchMiddleware::new(Arc::new(StaticPosts { posts: Vec::new() }));
        let store = store_with(Arc::new(StaticPosts { posts: Vec::new() }));

        let loading = PostsState {
            loading_state: LoadingState::Loading,
            ..Default::default()
        };

        let passed = middleware.handle(&PostsAction::FetchStarted, &loading, store.dispatcher());

        assert!(!passed);
    }
}
