//! Tree entity model, projections, and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use arbor_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// Full tree row from the `trees` table.
///
/// `branch_order` is the raw serialized column; decode it through
/// `arbor_core::order` before inspecting it.
#[derive(Debug, Clone, FromRow)]
pub struct Tree {
    pub tree_id: DbId,
    pub user_id: DbId,
    pub icon: String,
    pub tree_name: String,
    pub tree_desc: String,
    pub color: String,
    pub branch_order: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

/// Row of the trees ⋈ users listing, returned verbatim by the
/// tree-listing endpoint.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TreeSummary {
    pub tree_id: DbId,
    pub user_name: String,
    pub user_id: DbId,
    pub icon: String,
    pub tree_name: String,
    pub tree_desc: String,
}

/// Projection returned by the tree-branches read endpoint, verbatim.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TreeBranchOrder {
    pub branch_order: String,
    pub tree_id: DbId,
}

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Body of the create-tree endpoint.
///
/// Required-ness of `user_id`, `icon`, and `tree_name` is enforced by the
/// handler so all three absences share one fixed error message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTree {
    pub user_id: Option<DbId>,
    pub icon: Option<String>,
    pub tree_name: Option<String>,
    pub tree_desc: Option<String>,
    pub color: Option<String>,
}

/// Body of the save-branch-order endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveBranchOrder {
    pub branch_order: Option<String>,
    /// Sent by the client alongside the order; accepted and ignored.
    pub branch_names: Option<serde_json::Value>,
}
