//! Route definitions.

pub mod branches;
pub mod health;
pub mod trees;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /trees                                          create (POST)
/// /trees/{tree_id}/branches                       branch order (GET)
/// /trees/{tree_id}/branch-order                   save order (PUT)
///
/// /users/{user_id}/trees                          list trees (GET)
/// /users/{user_id}/branch-pool                    read pool (GET)
/// /users/{user_id}/branch-pool/{branch_id}/tree/{tree_id}
///                                                 pool transfer (PUT)
///
/// /branches/{branch_id}/name                      read name (GET)
/// /branches/name                                  rename (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/trees", trees::router())
        .nest("/users", users::router())
        .nest("/branches", branches::router())
}
