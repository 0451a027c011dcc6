//! Handlers for users: branch-pool reads.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use arbor_core::types::DbId;
use arbor_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::response::Envelope;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /users/{user_id}/branch-pool
// ---------------------------------------------------------------------------

/// Read a user's serialized branch pool, verbatim.
pub async fn get_branch_pool(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rows = UserRepo::get_branch_pool(&state.pool, user_id).await?;

    Ok(Json(Envelope::success(rows)))
}
