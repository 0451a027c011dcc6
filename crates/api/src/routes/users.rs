//! Routes for users, mounted at `/users`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{branches, trees, users};
use crate::state::AppState;

/// ```text
/// GET /{user_id}/trees                                    -> get_trees
/// GET /{user_id}/branch-pool                              -> get_branch_pool
/// PUT /{user_id}/branch-pool/{branch_id}/tree/{tree_id}   -> update_branch_pool
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{user_id}/trees", get(trees::get_trees))
        .route("/{user_id}/branch-pool", get(users::get_branch_pool))
        .route(
            "/{user_id}/branch-pool/{branch_id}/tree/{tree_id}",
            put(branches::update_branch_pool),
        )
}
