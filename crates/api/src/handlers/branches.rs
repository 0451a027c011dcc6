//! Handlers for branches: naming and the pool-to-tree transfer.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use arbor_core::types::DbId;
use arbor_db::models::branch::RenameBranch;
use arbor_db::repositories::{BranchRepo, UserRepo};

use crate::error::{ApiError, AppResult};
use crate::response::Envelope;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /branches/{branch_id}/name
// ---------------------------------------------------------------------------

/// Read a branch's name (matching rows, verbatim).
pub async fn get_branch_name(
    State(state): State<AppState>,
    Path(branch_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rows = BranchRepo::get_name(&state.pool, branch_id).await?;

    Ok(Json(Envelope::success(rows)))
}

// ---------------------------------------------------------------------------
// PUT /branches/name
// ---------------------------------------------------------------------------

/// Rename a branch. Both `branchId` and `branchName` are required.
pub async fn save_branch_name(
    State(state): State<AppState>,
    Json(body): Json<RenameBranch>,
) -> AppResult<impl IntoResponse> {
    let (Some(branch_id), Some(branch_name)) = (body.branch_id, body.branch_name.as_deref())
    else {
        return Err(ApiError::MissingField("data"));
    };

    let affected = BranchRepo::set_name(&state.pool, branch_id, branch_name).await?;

    tracing::info!(branch_id, name = branch_name, "Branch renamed");

    Ok(Json(Envelope::success(affected)))
}

// ---------------------------------------------------------------------------
// PUT /users/{user_id}/branch-pool/{branch_id}/tree/{tree_id}
// ---------------------------------------------------------------------------

/// Response of the pool transfer: the user and the id of the fresh
/// branch that took the transferred branch's pool slot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransferResponse {
    user_id: DbId,
    branch_id: DbId,
}

/// Move a branch out of the user's pool and into a tree.
///
/// Every pool slot equal to `branch_id` is substituted with a freshly
/// created unattached branch, and the original branch is re-homed to the
/// target tree. The whole sequence commits or rolls back together.
pub async fn update_branch_pool(
    State(state): State<AppState>,
    Path((user_id, branch_id, tree_id)): Path<(DbId, DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let new_branch_id =
        UserRepo::transfer_pool_branch(&state.pool, user_id, branch_id, tree_id)
            .await
            .inspect_err(|err| {
                tracing::error!(error = %err, user_id, branch_id, tree_id, "Pool transfer failed");
            })?;

    tracing::info!(user_id, branch_id, new_branch_id, tree_id, "Pool transfer complete");

    Ok(Json(TransferResponse {
        user_id,
        branch_id: new_branch_id,
    }))
}
