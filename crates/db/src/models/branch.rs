//! Branch entity model, projections, and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use arbor_core::types::{DbId, Timestamp};

/// Full branch row from the `branches` table.
#[derive(Debug, Clone, FromRow)]
pub struct Branch {
    pub branch_id: DbId,
    pub branch_name: String,
    pub tree_id: DbId,
    pub leaf_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Projection returned by the branch-name read endpoint, verbatim.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BranchNameRow {
    pub branch_name: String,
    pub branch_id: DbId,
}

/// Body of the rename-branch endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameBranch {
    pub branch_id: Option<DbId>,
    pub branch_name: Option<String>,
}
