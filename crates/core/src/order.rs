//! Codec for the `trees.branch_order` serialized column.
//!
//! The wire and storage format is a JSON array of `"branchId:position"`
//! strings, e.g. `["4:1","7:2"]`. Position counting starts at 1.

use crate::error::CoreError;
use crate::types::DbId;

/// One entry of a tree's branch order: which branch sits at which
/// display position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchSlot {
    pub branch_id: DbId,
    pub position: u32,
}

impl BranchSlot {
    fn parse(entry: &str) -> Result<Self, CoreError> {
        let malformed = |detail: String| CoreError::Malformed {
            column: "branch_order",
            detail,
        };

        let (id, position) = entry
            .split_once(':')
            .ok_or_else(|| malformed(format!("entry '{entry}' is not of the form 'id:position'")))?;

        Ok(Self {
            branch_id: id
                .parse()
                .map_err(|_| malformed(format!("branch id '{id}' is not a number")))?,
            position: position
                .parse()
                .map_err(|_| malformed(format!("position '{position}' is not a number")))?,
        })
    }
}

/// Decode a stored or client-submitted branch order.
pub fn decode_branch_order(raw: &str) -> Result<Vec<BranchSlot>, CoreError> {
    let entries: Vec<String> = serde_json::from_str(raw).map_err(|e| CoreError::Malformed {
        column: "branch_order",
        detail: e.to_string(),
    })?;

    entries.iter().map(|e| BranchSlot::parse(e)).collect()
}

/// Encode a branch order into its JSON wire format.
pub fn encode_branch_order(slots: &[BranchSlot]) -> String {
    let entries: Vec<String> = slots
        .iter()
        .map(|s| format!("{}:{}", s.branch_id, s.position))
        .collect();

    // Serializing a Vec<String> cannot fail.
    serde_json::to_string(&entries).expect("branch order serialization")
}
