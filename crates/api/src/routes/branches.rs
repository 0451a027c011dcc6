//! Routes for branches, mounted at `/branches`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::branches;
use crate::state::AppState;

/// ```text
/// GET /{branch_id}/name  -> get_branch_name
/// PUT /name              -> save_branch_name
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{branch_id}/name", get(branches::get_branch_name))
        .route("/name", put(branches::save_branch_name))
}
