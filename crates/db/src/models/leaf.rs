//! Leaf entity model.

use sqlx::FromRow;

use arbor_core::types::{DbId, Timestamp};

/// Full leaf row from the `leaves` table.
#[derive(Debug, Clone, FromRow)]
pub struct Leaf {
    pub leaf_id: DbId,
    pub branch_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
