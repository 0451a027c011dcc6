//! Repository for the `trees` table.

use sqlx::PgPool;

use arbor_core::tree::{initial_branch_order, RESERVED_TREE_ID};
use arbor_core::types::DbId;

use crate::models::tree::{Tree, TreeBranchOrder, TreeSummary};

/// Column list shared across full-row queries.
const COLUMNS: &str =
    "tree_id, user_id, icon, tree_name, tree_desc, color, branch_order, created_at, updated_at";

/// Provides operations on trees, including the three-statement creation
/// sequence.
pub struct TreeRepo;

impl TreeRepo {
    /// Create a tree together with its single initial branch.
    ///
    /// Runs in a transaction: insert the tree, insert a branch under the
    /// reserved tree, then point the tree's `branch_order` at that branch
    /// in position 1. Returns `(tree_id, branch_id)`.
    pub async fn create_with_initial_branch(
        pool: &PgPool,
        user_id: DbId,
        icon: &str,
        tree_name: &str,
        tree_desc: &str,
        color: &str,
    ) -> Result<(DbId, DbId), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (tree_id,): (DbId,) = sqlx::query_as(
            "INSERT INTO trees (user_id, icon, tree_name, tree_desc, color)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING tree_id",
        )
        .bind(user_id)
        .bind(icon)
        .bind(tree_name)
        .bind(tree_desc)
        .bind(color)
        .fetch_one(&mut *tx)
        .await?;

        let (branch_id,): (DbId,) = sqlx::query_as(
            "INSERT INTO branches (tree_id) VALUES ($1) RETURNING branch_id",
        )
        .bind(RESERVED_TREE_ID)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE trees SET branch_order = $1, updated_at = now() WHERE tree_id = $2",
        )
        .bind(initial_branch_order(branch_id))
        .bind(tree_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(tree_id, branch_id, "Tree created with initial branch");

        Ok((tree_id, branch_id))
    }

    /// Find a tree by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tree>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trees WHERE tree_id = $1");
        sqlx::query_as::<_, Tree>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's trees joined with the owner's name.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<TreeSummary>, sqlx::Error> {
        sqlx::query_as::<_, TreeSummary>(
            "SELECT trees.tree_id, users.user_name, trees.user_id,
                    trees.icon, trees.tree_name, trees.tree_desc
             FROM trees
             JOIN users ON trees.user_id = users.user_id
             WHERE trees.user_id = $1",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Read a tree's serialized branch order (matching rows, verbatim).
    pub async fn branch_order(
        pool: &PgPool,
        tree_id: DbId,
    ) -> Result<Vec<TreeBranchOrder>, sqlx::Error> {
        sqlx::query_as::<_, TreeBranchOrder>(
            "SELECT branch_order, tree_id FROM trees WHERE tree_id = $1",
        )
        .bind(tree_id)
        .fetch_all(pool)
        .await
    }

    /// Overwrite a tree's serialized branch order.
    ///
    /// Returns the number of rows affected (0 when the tree does not
    /// exist).
    pub async fn set_branch_order(
        pool: &PgPool,
        tree_id: DbId,
        branch_order: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE trees SET branch_order = $1, updated_at = now() WHERE tree_id = $2",
        )
        .bind(branch_order)
        .bind(tree_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
