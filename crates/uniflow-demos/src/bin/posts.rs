//! Posts CRUD demo
//!
//! Replays the scripted create/update/delete sequence and prints the
//! surviving posts as JSON.

use uniflow::Store;
use uniflow_demos::actions::{PostPatch, PostsAction};
use uniflow_demos::logger;
use uniflow_demos::reducers::reduce_posts;
use uniflow_demos::state::PostsState;

fn main() -> anyhow::Result<()> {
    logger::init();

    let mut store = Store::new(reduce_posts);

    let _subscription = store.subscribe(|state: &PostsState| {
        let ids: Vec<u64> = state.posts.iter().map(|post| post.id).collect();
        log::info!("posts: {:?}", ids);
    });

    store.dispatch(PostsAction::created(1, "First post", "Hello"));
    store.dispatch(PostsAction::created(2, "Second post", "World"));
    store.dispatch(PostsAction::created(3, "Third post", "Again"));
    store.dispatch(PostsAction::updated(1, PostPatch::title("X")));
    store.dispatch(PostsAction::Deleted { id: 2 });

    println!("{}", serde_json::to_string_pretty(&store.state().posts)?);
    Ok(())
}
