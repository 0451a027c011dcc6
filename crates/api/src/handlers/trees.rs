//! Handlers for trees: creation, listing, and branch-order reads and
//! writes.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use arbor_core::order::decode_branch_order;
use arbor_core::tree::DEFAULT_TREE_COLOR;
use arbor_core::types::DbId;
use arbor_db::models::tree::{CreateTree, SaveBranchOrder};
use arbor_db::repositories::TreeRepo;

use crate::error::{ApiError, AppResult};
use crate::response::{Envelope, StatusResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /trees
// ---------------------------------------------------------------------------

/// Create a tree with its single initial branch.
///
/// `userId`, `icon`, and `treeName` are required; `treeDesc` defaults to
/// the empty string and `color` to [`DEFAULT_TREE_COLOR`]. The tree
/// insert, the branch insert, and the branch-order update commit
/// together or not at all.
pub async fn add_tree(
    State(state): State<AppState>,
    Json(body): Json<CreateTree>,
) -> AppResult<impl IntoResponse> {
    let (Some(user_id), Some(icon), Some(tree_name)) =
        (body.user_id, body.icon.as_deref(), body.tree_name.as_deref())
    else {
        return Err(ApiError::MissingInput);
    };

    let tree_desc = body.tree_desc.as_deref().unwrap_or("");
    let color = body.color.as_deref().unwrap_or(DEFAULT_TREE_COLOR);

    let (tree_id, branch_id) =
        TreeRepo::create_with_initial_branch(&state.pool, user_id, icon, tree_name, tree_desc, color)
            .await?;

    tracing::info!(tree_id, branch_id, user_id, name = tree_name, "Tree created");

    Ok(Json(StatusResponse::success()))
}

// ---------------------------------------------------------------------------
// GET /users/{user_id}/trees
// ---------------------------------------------------------------------------

/// List a user's trees joined with the owner's name.
pub async fn get_trees(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let trees = TreeRepo::list_for_user(&state.pool, user_id).await?;

    tracing::debug!(count = trees.len(), user_id, "Listed trees for user");

    Ok(Json(Envelope::success(trees)))
}

// ---------------------------------------------------------------------------
// GET /trees/{tree_id}/branches
// ---------------------------------------------------------------------------

/// Read a tree's serialized branch order, verbatim.
pub async fn get_branches(
    State(state): State<AppState>,
    Path(tree_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rows = TreeRepo::branch_order(&state.pool, tree_id).await?;

    Ok(Json(Envelope::success(rows)))
}

// ---------------------------------------------------------------------------
// PUT /trees/{tree_id}/branch-order
// ---------------------------------------------------------------------------

/// Overwrite a tree's serialized branch order.
///
/// The submitted string must decode as a JSON array of `"id:position"`
/// entries; it is stored exactly as sent, so a later read returns the
/// same string. The ids are not checked against existing branches.
pub async fn save_branch_order(
    State(state): State<AppState>,
    Path(tree_id): Path<DbId>,
    Json(body): Json<SaveBranchOrder>,
) -> AppResult<impl IntoResponse> {
    let Some(branch_order) = body.branch_order.as_deref() else {
        return Err(ApiError::MissingField("branchOrder"));
    };

    decode_branch_order(branch_order)?;

    let affected = TreeRepo::set_branch_order(&state.pool, tree_id, branch_order).await?;

    tracing::info!(tree_id, affected, "Branch order saved");

    Ok(Json(Envelope::success(affected)))
}
