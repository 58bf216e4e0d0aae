use chrono::{DateTime, Local};
use posts_client::Post;
use serde::Serialize;
use uniflow::State;

/// Loading state for the posts collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum LoadingState {
    /// Not started loading
    #[default]
    Idle,
    /// Currently loading
    Loading,
    /// Successfully loaded
    Loaded,
    /// Failed to load
    Error(String),
}

/// State for the posts demos (local CRUD and remote fetch)
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PostsState {
    /// Posts in insertion order
    pub posts: Vec<Post>,

    /// Where the collection stands with respect to the remote API
    pub loading_state: LoadingState,

    /// When the collection was last fetched successfully
    pub last_updated: Option<DateTime<Local>>,
}

impl PostsState {
    /// Whether a fetch is currently in flight
    pub fn is_loading(&self) -> bool {
        matches!(self.loading_state, LoadingState::Loading)
    }

    /// Whether the last fetch reached a terminal state (loaded or failed)
    pub fn is_settled(&self) -> bool {
        matches!(
            self.loading_state,
            LoadingState::Loaded | LoadingState::Error(_)
        )
    }

    /// The failure descriptor of the last fetch, if it failed
    pub fn error(&self) -> Option<&str> {
        match &self.loading_state {
            LoadingState::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl State for PostsState {}
