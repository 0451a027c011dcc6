//! User entity model and projections.

use serde::Serialize;
use sqlx::FromRow;

use arbor_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// `branch_pool` is the raw serialized column; decode it through
/// `arbor_core::pool` before inspecting it.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: DbId,
    pub user_name: String,
    pub branch_pool: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Projection returned by the branch-pool read endpoint, verbatim.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BranchPoolRow {
    pub user_id: DbId,
    pub branch_pool: String,
}
