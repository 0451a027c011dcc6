//! Repository for the `leaves` table.

use sqlx::PgPool;

use arbor_core::types::DbId;

use crate::models::leaf::Leaf;

/// Provides operations on leaves.
pub struct LeafRepo;

impl LeafRepo {
    /// Insert a new leaf for a branch, returning its id.
    ///
    /// The branch side of the link is a separate update
    /// ([`crate::repositories::BranchRepo::set_leaf`]).
    pub async fn create(pool: &PgPool, branch_id: DbId) -> Result<DbId, sqlx::Error> {
        let (leaf_id,): (DbId,) = sqlx::query_as(
            "INSERT INTO leaves (branch_id) VALUES ($1) RETURNING leaf_id",
        )
        .bind(branch_id)
        .fetch_one(pool)
        .await?;

        Ok(leaf_id)
    }

    /// Find a leaf by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Leaf>, sqlx::Error> {
        sqlx::query_as::<_, Leaf>(
            "SELECT leaf_id, branch_id, created_at, updated_at FROM leaves WHERE leaf_id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
