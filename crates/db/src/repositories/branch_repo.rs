//! Repository for the `branches` table.

use sqlx::PgPool;

use arbor_core::types::DbId;

use crate::models::branch::{Branch, BranchNameRow};

/// Column list shared across full-row queries.
const COLUMNS: &str = "branch_id, branch_name, tree_id, leaf_id, created_at, updated_at";

/// Provides operations on branches.
pub struct BranchRepo;

impl BranchRepo {
    /// Insert a new branch under the given tree, returning its id.
    ///
    /// The name starts empty; pass `RESERVED_TREE_ID` to create an
    /// unattached / pool-resident branch.
    pub async fn create(pool: &PgPool, tree_id: DbId) -> Result<DbId, sqlx::Error> {
        let (branch_id,): (DbId,) = sqlx::query_as(
            "INSERT INTO branches (tree_id) VALUES ($1) RETURNING branch_id",
        )
        .bind(tree_id)
        .fetch_one(pool)
        .await?;

        Ok(branch_id)
    }

    /// Find a branch by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Branch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM branches WHERE branch_id = $1");
        sqlx::query_as::<_, Branch>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Read a branch's name (matching rows, verbatim).
    pub async fn get_name(
        pool: &PgPool,
        branch_id: DbId,
    ) -> Result<Vec<BranchNameRow>, sqlx::Error> {
        sqlx::query_as::<_, BranchNameRow>(
            "SELECT branch_name, branch_id FROM branches WHERE branch_id = $1",
        )
        .bind(branch_id)
        .fetch_all(pool)
        .await
    }

    /// Rename a branch. Returns the number of rows affected.
    pub async fn set_name(
        pool: &PgPool,
        branch_id: DbId,
        branch_name: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE branches SET branch_name = $1, updated_at = now() WHERE branch_id = $2",
        )
        .bind(branch_name)
        .bind(branch_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Attach a leaf to a branch. Returns the number of rows affected.
    ///
    /// Not part of the create-tree flow; leaves are linked separately.
    pub async fn set_leaf(
        pool: &PgPool,
        branch_id: DbId,
        leaf_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE branches SET leaf_id = $1, updated_at = now() WHERE branch_id = $2",
        )
        .bind(leaf_id)
        .bind(branch_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
