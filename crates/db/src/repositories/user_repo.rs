//! Repository for the `users` table, including the pool-transfer
//! sequence.

use sqlx::PgPool;

use arbor_core::error::CoreError;
use arbor_core::pool::{decode_branch_pool, encode_branch_pool, substitute_branch};
use arbor_core::tree::RESERVED_TREE_ID;
use arbor_core::types::DbId;

use crate::models::user::{BranchPoolRow, User};
use crate::DbError;

/// Column list shared across full-row queries.
const COLUMNS: &str = "user_id, user_name, branch_pool, created_at, updated_at";

/// Provides operations on users and their branch pools.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user with the given pool, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_name: &str,
        branch_pool: &[DbId],
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (user_name, branch_pool)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(user_name)
            .bind(encode_branch_pool(branch_pool))
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE user_id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Read a user's serialized branch pool (matching rows, verbatim).
    pub async fn get_branch_pool(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<BranchPoolRow>, sqlx::Error> {
        sqlx::query_as::<_, BranchPoolRow>(
            "SELECT user_id, branch_pool FROM users WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Move `branch_id` out of the user's pool and into `tree_id`.
    ///
    /// The pool slot is not removed: a brand-new branch is created under
    /// the reserved tree and substituted for every pool entry equal to
    /// `branch_id`, while the original branch is re-homed to `tree_id`.
    /// The pool loses `branch_id`, gains an empty branch, and `branch_id`
    /// itself ends up attached to the target tree.
    ///
    /// Runs in a transaction; returns the new branch's id.
    pub async fn transfer_pool_branch(
        pool: &PgPool,
        user_id: DbId,
        branch_id: DbId,
        tree_id: DbId,
    ) -> Result<DbId, DbError> {
        let mut tx = pool.begin().await?;

        let (new_branch_id,): (DbId,) = sqlx::query_as(
            "INSERT INTO branches (tree_id) VALUES ($1) RETURNING branch_id",
        )
        .bind(RESERVED_TREE_ID)
        .fetch_one(&mut *tx)
        .await?;

        let row: Option<(String,)> =
            sqlx::query_as("SELECT branch_pool FROM users WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?;

        let (raw_pool,) = row.ok_or(CoreError::NotFound {
            entity: "User",
            id: user_id,
        })?;

        let branch_pool = decode_branch_pool(&raw_pool)?;
        let branch_pool = substitute_branch(&branch_pool, branch_id, new_branch_id);

        sqlx::query("UPDATE users SET branch_pool = $1, updated_at = now() WHERE user_id = $2")
            .bind(encode_branch_pool(&branch_pool))
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE branches SET tree_id = $1, updated_at = now() WHERE branch_id = $2")
            .bind(tree_id)
            .bind(branch_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            user_id,
            branch_id,
            new_branch_id,
            tree_id,
            "Branch transferred out of pool"
        );

        Ok(new_branch_id)
    }
}
