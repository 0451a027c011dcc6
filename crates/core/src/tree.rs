//! Tree constants and the initial branch-order rule.

use crate::order::{encode_branch_order, BranchSlot};
use crate::types::DbId;

/// Sentinel tree that marks a branch as unattached / pool-resident.
/// Seeded by migration 0002.
pub const RESERVED_TREE_ID: DbId = 1;

/// Color applied to a new tree when the client does not send one.
pub const DEFAULT_TREE_COLOR: &str = "#000000";

/// Branch order written to a freshly created tree: its single initial
/// branch at position 1.
pub fn initial_branch_order(branch_id: DbId) -> String {
    encode_branch_order(&[BranchSlot {
        branch_id,
        position: 1,
    }])
}
