//! Routes for trees, mounted at `/trees`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::trees;
use crate::state::AppState;

/// ```text
/// POST /                           -> add_tree
/// GET  /{tree_id}/branches         -> get_branches
/// PUT  /{tree_id}/branch-order     -> save_branch_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(trees::add_tree))
        .route("/{tree_id}/branches", get(trees::get_branches))
        .route("/{tree_id}/branch-order", put(trees::save_branch_order))
}
