//! Remote posts demo
//!
//! Wires the fetch middleware over a live posts API, dispatches the
//! fetch-start action, and pumps the store until the load settles.
//! Set `POSTS_API_URL` to point at a different endpoint.

use std::sync::Arc;

use posts_client::{HttpPostsApi, DEFAULT_BASE_URL};
use uniflow::{LoggingMiddleware, Store};
use uniflow_demos::actions::PostsAction;
use uniflow_demos::logger;
use uniflow_demos::middleware::FetchMiddleware;
use uniflow_demos::reducers::reduce_posts;
use uniflow_demos::state::PostsState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logger::init();

    log::info!("Starting api_posts");

    let base_url = std::env::var("POSTS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let client = Arc::new(HttpPostsApi::new(base_url));

    let mut store = Store::new(reduce_posts);

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::default()));
    store.add_middleware(Box::new(FetchMiddleware::new(client)));

    let _subscription = store.subscribe(|state: &PostsState| {
        log::info!(
            "loading: {}, posts: {}, last updated: {:?}",
            state.is_loading(),
            state.posts.len(),
            state.last_updated,
        );
    });

    store.dispatch(PostsAction::FetchStarted);

    while !store.state().is_settled() {
        store.process_next().await;
    }

    match store.state().error() {
        Some(error) => eprintln!("Error: {}", error),
        None => println!("{}", serde_json::to_string_pretty(&store.state().posts)?),
    }

    Ok(())
}
